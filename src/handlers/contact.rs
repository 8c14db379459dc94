use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::info;

use crate::db::ContactInquiry;
use crate::error::ApiError;
use crate::router::DirectoryState;
use crate::types::contact::ContactInquiryRequest;
use crate::types::envelope::Envelope;

const SUBMIT_FAILED: &str = "Failed to submit contact inquiry";

/// POST /api/contact -> validate and store a visitor inquiry.
///
/// A body that is not JSON is a server-side failure (500); a JSON body with
/// unknown, mistyped or missing fields is a validation failure (400).
pub async fn submit_contact_handler(
    State(state): State<DirectoryState>,
    body: Bytes,
) -> Result<Json<Envelope<ContactInquiry>>, ApiError> {
    let value: Value = serde_json::from_slice(&body).map_err(ApiError::internal(SUBMIT_FAILED))?;
    let request: ContactInquiryRequest =
        serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))?;
    let inquiry = request
        .validate()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    let saved = state
        .storage
        .insert_contact_inquiry(inquiry)
        .await
        .map_err(ApiError::internal(SUBMIT_FAILED))?;

    info!(
        inquiry_id = saved.id,
        provider_id = saved.provider_id,
        "contact inquiry stored"
    );
    Ok(Json(Envelope::ok(saved)))
}
