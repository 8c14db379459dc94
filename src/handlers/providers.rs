use axum::{
    Json,
    extract::{Path, State},
};

use crate::db::Provider;
use crate::error::ApiError;
use crate::router::DirectoryState;
use crate::types::envelope::Envelope;

/// GET /api/providers -> visible, ACTIVE providers.
pub async fn list_providers_handler(
    State(state): State<DirectoryState>,
) -> Result<Json<Envelope<Vec<Provider>>>, ApiError> {
    let providers = state
        .storage
        .list_directory_providers()
        .await
        .map_err(ApiError::internal("Failed to fetch providers"))?;
    Ok(Json(Envelope::ok(providers)))
}

/// GET /api/providers/{id} -> one provider. The whole segment must be an
/// integer; `5abc` does not resolve to provider 5.
pub async fn get_provider_handler(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Provider>>, ApiError> {
    let Ok(id) = id.trim().parse::<i64>() else {
        return Err(ApiError::NotFound("Provider not found"));
    };

    state
        .storage
        .get_provider(id)
        .await
        .map_err(ApiError::internal("Failed to fetch provider"))?
        .map(|p| Json(Envelope::ok(p)))
        .ok_or(ApiError::NotFound("Provider not found"))
}
