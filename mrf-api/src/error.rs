//! MRF API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mrf_core::CoreError;
use mrf_storage::StorageError;
use serde::Serialize;
use thiserror::Error;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submitted claim rows failed validation
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Core error
    #[error("{0}")]
    Core(#[from] CoreError),
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Per-row details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a validation error carrying per-row messages
    pub fn validation(msg: impl Into<String>, details: Vec<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            details,
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Storage(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Core(CoreError::EmptyClaims | CoreError::MissingCustomer) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::BadRequest(msg) => ErrorResponse::new("BAD_REQUEST", msg),
            ApiError::NotFound(msg) => ErrorResponse::new("NOT_FOUND", msg),
            ApiError::Validation { message, details } => ErrorResponse {
                details: Some(details),
                ..ErrorResponse::new("VALIDATION_ERROR", message)
            },
            ApiError::Internal(msg) => ErrorResponse::new("INTERNAL_ERROR", msg),
            ApiError::Storage(e) if e.is_not_found() => ErrorResponse::new("NOT_FOUND", e.to_string()),
            ApiError::Storage(e) => {
                tracing::error!(error = %e, "Storage failure while handling request");
                ErrorResponse::new("STORAGE_ERROR", e.to_string())
            }
            ApiError::Core(e) if status == StatusCode::BAD_REQUEST => {
                ErrorResponse::new("BAD_REQUEST", e.to_string())
            }
            ApiError::Core(e) => ErrorResponse::new("INTERNAL_ERROR", e.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
