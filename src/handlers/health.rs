use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Graston Membership Directory API";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET / -> liveness and version probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
