use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /health`: liveness only, no upstream calls.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK",
        message: "Jira proxy server is running",
    })
}
