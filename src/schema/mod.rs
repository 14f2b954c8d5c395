//! Rule schema subsystem
//!
//! The field schema is a fixed, ordered, closed set of 18 names: a
//! required prefix of 6 fields that every record must populate, and an
//! optional tail of 12 shown on the edit form only on demand.
//!
//! # Design Principles
//!
//! - Records are validated against the schema at construction
//! - Identifiers are assigned once and never change
//! - Absent and empty field values are equivalent
//! - Validation is deterministic

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, ValidationError};
pub use types::{FieldDef, RecordDraft, RecordId, RuleRecord, RuleSchema};
pub use validator::DraftValidator;
