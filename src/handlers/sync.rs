use axum::{Json, body::Bytes};
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::types::envelope::Envelope;

/// POST /api/sync/wordpress -> acknowledge a CMS change notification.
///
/// The payload is logged only; nothing is persisted.
pub async fn wordpress_sync_handler(body: Bytes) -> Result<Json<Envelope<()>>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(ApiError::internal("Sync failed"))?;
    info!(payload = %payload, "WordPress sync webhook received");
    Ok(Json(Envelope::acknowledged("Sync initiated")))
}
