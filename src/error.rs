use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure class to its status code and renders it as a JSON
/// `{"detail": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// No record stored under the requested id
    TodoNotFound(String),
    /// The record store reported a failure
    StoreError(StoreError),
    /// Request body missing, not JSON, or not a valid todo payload
    InvalidPayload(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::TodoNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Todo not found: {}", id),
            ),
            ApiError::StoreError(err) => {
                tracing::error!("Store operation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Store error: {}", err),
                )
            }
            ApiError::InvalidPayload(rejection) => {
                tracing::warn!("Rejected request payload: {}", rejection.body_text());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Invalid payload: {}", rejection.body_text()),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::StoreError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload(rejection)
    }
}
