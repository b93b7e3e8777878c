use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error taxonomy of the service boundary.
///
/// Only a short message crosses the boundary; storage failure detail is
/// logged server-side and replaced with a generic body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, rejected before the storage layer runs.
    #[error("{0}")]
    Validation(String),
    /// Update/delete target does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Underlying store unavailable or constraint violation. At-most-once;
    /// no retry happens anywhere.
    #[error("{0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            AppError::Storage(m) => {
                tracing::error!("storage failure: {}", m);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage failure".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
