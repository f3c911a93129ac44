use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Handler error carrying the HTTP status and a plain-text message.
///
/// Pod clients expect short human-readable text bodies on failure, not a
/// JSON envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::not_found("File not found."),
            StoreError::InvalidIdentifier(id) => {
                tracing::debug!(id = %id, "Rejected resource identifier");
                ApiError::bad_request("Invalid resource name.")
            }
            // The cause goes to the log, never to the client.
            StoreError::Io(e) => {
                tracing::error!(error = %e, "Storage failure");
                ApiError::internal("Storage failure.")
            }
        }
    }
}
