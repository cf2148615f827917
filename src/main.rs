//! CI/CD demo app - greeting and health-check server.
//!
//! Serves a plaintext greeting on `/` and a static liveness payload on `/health`.
//!
//! HTTP API is powered by Axum.
use anyhow::Context;
use axum::Server;
use env_logger::Env;
use hyper::server::{conn::AddrIncoming, Builder};
use std::net::SocketAddr;
use tower_http::trace::{DefaultOnResponse, TraceLayer};

// Modules
mod api;
mod app_config;

/// Take the listening socket. Failure here aborts startup.
fn bind(addr: &SocketAddr) -> anyhow::Result<Builder<AddrIncoming>> {
    Server::try_bind(addr).with_context(|| format!("failed to bind {addr}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Read configuration.
    let cfg = app_config::get_config().context("failed to load configuration")?;
    let addr = cfg.socket_addr()?;

    // Per-request logging, bridged from tracing to the log facade.
    let trace = TraceLayer::new_for_http()
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO));

    let axumapp = api::router().layer(trace);

    let server = bind(&addr)?.serve(axumapp.into_make_service());

    log::info!("Listening on {}", server.local_addr());

    server.await.context("server error")?;

    Ok(())
}
