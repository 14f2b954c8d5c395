//! # HTTP Errors
//!
//! Error types for the JSON surface, mapped onto status codes and a
//! uniform error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::schema::{SchemaError, ValidationError};
use crate::store::StoreError;

use super::response::ErrorBody;

/// Result type for HTTP handlers
pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP surface errors
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Request body or path segment could not be interpreted
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Write access is disabled for this deployment
    #[error("you do not have write access to modify rules")]
    WriteDenied,

    /// No record with the given identifier
    #[error("record '{0}' not found")]
    NotFound(String),

    /// Field name outside the closed schema
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Required-field validation failed
    #[error("{0}")]
    Validation(ValidationError),

    /// The store could not serve the request
    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            HttpError::InvalidRequest(_) => "INVALID_REQUEST",
            HttpError::WriteDenied => "WRITE_ACCESS_DENIED",
            HttpError::NotFound(_) => "RECORD_NOT_FOUND",
            HttpError::UnknownField(_) => "UNKNOWN_FIELD",
            HttpError::Validation(_) => "VALIDATION_FAILED",
            HttpError::Internal(_) => "INTERNAL",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::WriteDenied => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::UnknownField(_) => StatusCode::BAD_REQUEST,
            HttpError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => HttpError::NotFound(id.to_string()),
            StoreError::Schema(SchemaError::UnknownField(field)) => HttpError::UnknownField(field),
            StoreError::Schema(SchemaError::Validation(v)) => HttpError::Validation(v),
            StoreError::Unavailable(message) => HttpError::Internal(message),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.code(), self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}
