use anyhow::Context;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError};
use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to listen on (default: '0.0.0.0')
    pub host: String,
    /// Server port (default: 8080)
    pub port: u16,
}

impl AppConfig {
    /// Address the listener binds to.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .with_context(|| format!("invalid listen address '{addr}'"))
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)
}

pub fn get_config() -> anyhow::Result<AppConfig> {
    let _ = dotenvy::dotenv();

    let config = with_defaults()?
        .add_source(config::Environment::with_prefix("APP").try_parsing(true))
        .build()?;

    let my_config: AppConfig = config.try_deserialize()?;

    Ok(my_config)
}
