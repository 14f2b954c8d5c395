//! Draft validation against the rule schema.
//!
//! Validation semantics:
//! - Every field named by the draft must be declared in the schema
//! - Every required field must hold a non-empty value
//! - Validation is deterministic and does not mutate the draft

use super::errors::{SchemaError, SchemaResult, ValidationError};
use super::types::{FieldDef, RecordDraft, RuleSchema};

/// Validates record drafts against the closed field schema.
pub struct DraftValidator<'a> {
    schema: &'a RuleSchema,
}

impl<'a> DraftValidator<'a> {
    pub fn new(schema: &'a RuleSchema) -> Self {
        Self { schema }
    }

    /// Validates a draft.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownField` for the first undeclared field
    /// encountered, or `SchemaError::Validation` naming every required
    /// field that is absent or empty, in canonical schema order.
    pub fn validate(&self, draft: &RecordDraft) -> SchemaResult<()> {
        for name in draft.field_names() {
            if !self.schema.contains(name) {
                return Err(SchemaError::UnknownField(name.to_string()));
            }
        }

        let missing: Vec<String> = self
            .schema
            .required_fields()
            .filter(|f| draft.value(f.name()).is_none())
            .map(|f| f.name().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::new(missing).into());
        }

        Ok(())
    }

    /// Required fields the draft leaves empty, without failing fast on
    /// unknown fields. Used by the editor for field-scoped messages.
    pub fn missing_required(&self, draft: &RecordDraft) -> Vec<&'static FieldDef> {
        self.schema
            .required_fields()
            .filter(|f| draft.value(f.name()).is_none())
            .collect()
    }
}
