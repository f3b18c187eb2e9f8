//! HTTP error handling and response types.
//!
//! Error bodies are plain text so the client can show them verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::services::ValidationError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Rejected conversion input
    Validation(ValidationError),
    /// Resource not found
    NotFound(String),
    /// Internal server error; the detail is logged, never returned
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(e) => e.to_string(),
            AppError::NotFound(msg) => msg,
            AppError::Internal(detail) => {
                tracing::error!(%detail, "Unhandled error in handler");
                "Internal Server Error".to_string()
            }
        };
        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
