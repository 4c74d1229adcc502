use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster::Failure;
use thiserror::Error;

/// Every failure a handler can produce, normalized at the boundary.
///
/// Only the submission path is allowed to leak store detail (`Database`);
/// everything else collapses into the generic `Internal` body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required parameters")]
    MissingName,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingName => (
                StatusCode::BAD_REQUEST,
                Failure {
                    message: "Missing required parameters".to_string(),
                    error: None,
                },
            ),
            AppError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Failure {
                    message: "Database error".to_string(),
                    error: Some(e.to_string()),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Failure {
                    message: "Internal Server Error".to_string(),
                    error: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
