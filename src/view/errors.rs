//! View composer error types.

use thiserror::Error;

use crate::schema::{RecordId, ValidationError};
use crate::store::StoreError;

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors surfaced by the view composer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Write access is disabled; add/edit actions are rejected
    #[error("write access is disabled")]
    WriteAccessDenied,

    /// An operation needed an open editor session and none exists
    #[error("no editor session is open")]
    NoActiveSession,

    /// The record is not part of the loaded snapshot
    #[error("record '{0}' is not in the loaded set")]
    UnknownRecord(RecordId),

    /// Save blocked by required-field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected or failed the operation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The store did not answer within the configured timeout
    #[error("'{operation}' timed out after {timeout_ms} ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },
}
