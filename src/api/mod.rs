use axum::{routing::any, Router};

pub mod greeting;
pub mod health;

/// Route table. Anything not listed here gets axum's default 404.
pub fn router() -> Router {
    Router::new()
        .route("/", any(greeting::get_greeting))
        .route("/health", any(health::get_health))
}
