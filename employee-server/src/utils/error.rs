//! Unified error handling
//!
//! [`AppError`] is the handler-level error; its `IntoResponse` impl picks
//! the wire status:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | NotFound | 404 | empty |
//! | Validation | 400 | field-keyed error map |
//! | InvalidArgument | 500 | empty (logged) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;
use crate::utils::validation::ValidationReport;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource does not exist (404, empty body)
    #[error("Resource not found")]
    NotFound,

    /// Request payload failed validation (400, field-keyed error map)
    #[error("Validation failed")]
    Validation(ValidationReport),

    /// Programmer-level misuse of a lower layer. Not meant to surface:
    /// handlers pre-check existence before repository updates precisely to
    /// keep this off the wire. If it does surface, it is a 500.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for request handlers
pub type AppResult<T> = Result<T, AppError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),

            AppError::Validation(report) => {
                (StatusCode::BAD_REQUEST, Json(report)).into_response()
            }

            AppError::InvalidArgument(msg) => {
                error!(error = %msg, "Invalid argument reached the response path");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
