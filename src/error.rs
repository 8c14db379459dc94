use axum::{Json, http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::types::envelope::Envelope;

#[derive(Debug, ThisError)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Classify an insert failure: unique and foreign-key failures become
    /// `ConstraintViolation`, everything else stays a database error.
    pub fn from_insert(e: SqlxError) -> Self {
        if let SqlxError::Database(db) = &e
            && (db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation())
        {
            return DirectoryError::ConstraintViolation(db.message().to_string());
        }
        DirectoryError::Database(e)
    }
}

/// Handler-boundary error, rendered as a `{success:false, error}` envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Caller input failed a required-field check.
    Validation(String),
    /// Single-record lookup yielded no row.
    NotFound(&'static str),
    /// Anything failing below the handler; the cause is logged, not returned.
    Internal {
        message: &'static str,
        source: DirectoryError,
    },
}

impl ApiError {
    /// `map_err` adapter attaching the client-facing message to a failure.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> ApiError
    where
        E: Into<DirectoryError>,
    {
        move |e| ApiError::Internal {
            message,
            source: e.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(msg) => msg,
            ApiError::NotFound(msg) => msg.to_string(),
            ApiError::Internal { message, source } => {
                error!(error = %source, "{}", message);
                message.to_string()
            }
        };
        (status, Json(Envelope::<()>::failure(message))).into_response()
    }
}
