//! Editor error types.

use thiserror::Error;

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors raised while manipulating an edit session.
///
/// Save-time validation failures are reported separately as
/// [`crate::schema::ValidationError`], which carries the offending
/// field names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Field name is not part of the schema
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Field is required and cannot join or leave the optional set
    #[error("'{0}' is not an optional field")]
    NotOptional(String),
}
