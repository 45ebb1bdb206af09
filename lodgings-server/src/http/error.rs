//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status
//! codes. Storage failures are logged and reported opaquely.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// No route or record behind this path (404)
    PathNotFound { path: String },

    /// Storage error (500, logged)
    Storage(StoreError),
}

impl ApiError {
    /// 404 for a path with no route or record behind it.
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.to_string() }),
            ),
            Self::PathNotFound { path } => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("Path {} does not exist", path) }),
            ),
            Self::Storage(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "an internal error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Storage(e)
    }
}
