//! Schema error types.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised when a draft is checked against the rule schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Field name is not part of the closed schema
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// One or more required fields are absent or empty
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Validation failure carrying the offending field names.
///
/// `missing` lists every required field that was absent or empty,
/// in canonical schema order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required fields are empty: {}", missing.join(", "))]
pub struct ValidationError {
    /// Required fields that were absent or empty
    pub missing: Vec<String>,
}

impl ValidationError {
    pub fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }
}
