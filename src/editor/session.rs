//! Schema-driven edit sessions.
//!
//! A session backs one open editor form. The six required fields are
//! always on the form; optional fields join the active set either
//! because the record being edited already holds a value for them, or
//! because the user selects them. Values typed into a field survive the
//! field leaving the active set, but only active fields reach the save
//! payload.

use std::collections::HashMap;

use crate::schema::{
    DraftValidator, FieldDef, RecordDraft, RecordId, RuleRecord, RuleSchema, ValidationError,
};

use super::errors::{EditorError, EditorResult};

/// Whether the session creates a record or rewrites an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(RecordId),
}

/// The write the store should perform for a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Insert(RecordDraft),
    Update(RecordId, RecordDraft),
}

/// One open editor form.
pub struct EditSession {
    schema: RuleSchema,
    mode: EditMode,
    form: HashMap<String, String>,
    active_optional: Vec<String>,
}

impl EditSession {
    /// Creation mode: empty form, no optional fields active
    pub fn create(schema: RuleSchema) -> Self {
        Self {
            schema,
            mode: EditMode::Create,
            form: HashMap::new(),
            active_optional: Vec::new(),
        }
    }

    /// Edit mode: form seeded from the record, and every optional field
    /// the record holds a value for joins the active set
    pub fn edit(schema: RuleSchema, record: &RuleRecord) -> Self {
        let mut form = HashMap::new();
        for field in schema.fields() {
            if let Some(value) = record.value(field.name()) {
                form.insert(field.name().to_string(), value.to_string());
            }
        }

        let active_optional = schema
            .optional_fields()
            .filter(|f| record.has_value(f.name()))
            .map(|f| f.name().to_string())
            .collect();

        Self {
            schema,
            mode: EditMode::Edit(record.id()),
            form,
            active_optional,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_create(&self) -> bool {
        matches!(self.mode, EditMode::Create)
    }

    /// Type into a form field
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> EditorResult<()> {
        if !self.schema.contains(field) {
            return Err(EditorError::UnknownField(field.to_string()));
        }
        self.form.insert(field.to_string(), value.into());
        Ok(())
    }

    /// Current form value for a field, hidden or not
    pub fn value(&self, field: &str) -> Option<&str> {
        self.form.get(field).map(String::as_str)
    }

    /// Replace the active optional-field set.
    ///
    /// Values for fields leaving the set stay in form state; re-adding a
    /// field restores what was typed.
    pub fn select_optional(&mut self, fields: Vec<String>) -> EditorResult<()> {
        for name in &fields {
            match self.schema.field(name) {
                None => return Err(EditorError::UnknownField(name.clone())),
                Some(def) if def.is_required() => {
                    return Err(EditorError::NotOptional(name.clone()))
                }
                Some(_) => {}
            }
        }
        self.active_optional = fields;
        Ok(())
    }

    /// Optional fields currently on the form
    pub fn active_optional(&self) -> &[String] {
        &self.active_optional
    }

    /// All fields currently on the form: the required prefix plus active
    /// optional fields, in canonical schema order
    pub fn visible_fields(&self) -> Vec<&'static FieldDef> {
        self.schema
            .fields()
            .iter()
            .filter(|f| f.is_required() || self.active_optional.iter().any(|a| a == f.name()))
            .collect()
    }

    /// Validate the form and produce the store write.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming every required field left empty,
    /// in canonical schema order. Nothing is written on failure.
    pub fn save(&self) -> Result<SaveRequest, ValidationError> {
        let mut draft = RecordDraft::new();
        for field in self.visible_fields() {
            if let Some(value) = self.form.get(field.name()) {
                draft.set(field.name(), value.clone());
            }
        }

        let missing: Vec<String> = DraftValidator::new(&self.schema)
            .missing_required(&draft)
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::new(missing));
        }

        Ok(match self.mode {
            EditMode::Create => SaveRequest::Insert(draft),
            EditMode::Edit(id) => SaveRequest::Update(id, draft),
        })
    }
}
