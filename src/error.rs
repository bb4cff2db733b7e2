//! Domain error types for the case file gateway.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::IdentifierError;

/// Client-facing text for any storage failure that is not a missing file.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download file";

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid input data
    #[error("{0}")]
    InvalidInput(String),

    /// Volume credentials are missing
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Storage download failed; the cause is logged, never returned
    #[error("Failed to download file")]
    DownloadFailed,
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DownloadFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<IdentifierError> for AppError {
    fn from(err: IdentifierError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
