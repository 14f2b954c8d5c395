//! Store error types.

use thiserror::Error;

use crate::schema::{RecordId, SchemaError};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by a rule store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the given identifier exists
    #[error("record '{0}' not found")]
    NotFound(RecordId),

    /// The submitted draft violates the field schema
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The backing store could not serve the request
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
