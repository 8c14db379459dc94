use axum::{Json, extract::State};

use crate::db::Accreditation;
use crate::error::ApiError;
use crate::router::DirectoryState;
use crate::types::envelope::Envelope;

/// GET /api/accreditations -> active accreditations by display order.
pub async fn list_accreditations_handler(
    State(state): State<DirectoryState>,
) -> Result<Json<Envelope<Vec<Accreditation>>>, ApiError> {
    let accreditations = state
        .storage
        .list_active_accreditations()
        .await
        .map_err(ApiError::internal("Failed to fetch accreditations"))?;
    Ok(Json(Envelope::ok(accreditations)))
}
