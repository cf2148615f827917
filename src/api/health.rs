use axum::response::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe. Does not check any dependency.
/// Body is exactly `{"status":"OK"}`, with no trailing newline.
/// Url: /health
/// Method: any
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
