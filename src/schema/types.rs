//! Rule record schema and record types.
//!
//! The schema is a fixed, ordered, closed set of 18 named fields. The
//! first six are required on every record; the rest are optional. A
//! record's field values are plain strings, and an absent field and an
//! empty value are equivalent ("no value").

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::SchemaResult;
use super::validator::DraftValidator;

/// A single field definition: canonical name plus required flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    name: &'static str,
    required: bool,
}

impl FieldDef {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }

    /// Canonical field name as shown in the table header
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the field must hold a value on every saved record
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Canonical field order. The required prefix is always shown on the
/// edit form; the optional tail is added per-record on demand.
const FIELDS: [FieldDef; 18] = [
    FieldDef::required("Rule Type"),
    FieldDef::required("MD State"),
    FieldDef::required("Ship to State"),
    FieldDef::required("Zip Code"),
    FieldDef::required("Channel"),
    FieldDef::required("Reg Cat Code"),
    FieldDef::optional("Drug Schedule"),
    FieldDef::optional("Refill #"),
    FieldDef::optional("Quantity"),
    FieldDef::optional("Days Supply"),
    FieldDef::optional("User Location"),
    FieldDef::optional("Dispensing Location"),
    FieldDef::optional("Protocol"),
    FieldDef::optional("Days Ago"),
    FieldDef::optional("Max Days Supply"),
    FieldDef::optional("Max Quantity"),
    FieldDef::optional("Max Refill"),
    FieldDef::optional("Max Days Allowed to Expiry Date"),
];

/// The closed regulatory-rule field schema.
///
/// The schema is fixed at compile time; every record and draft is
/// validated against it before it enters a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSchema;

impl RuleSchema {
    /// All field definitions in canonical order
    pub fn fields(&self) -> &'static [FieldDef] {
        &FIELDS
    }

    /// Number of fields in the schema
    pub fn field_count(&self) -> usize {
        FIELDS.len()
    }

    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        FIELDS.iter().find(|f| f.name == name)
    }

    /// Whether `name` is part of the schema
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Required fields in canonical order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        FIELDS.iter().filter(|f| f.required)
    }

    /// Optional fields in canonical order
    pub fn optional_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        FIELDS.iter().filter(|f| !f.required)
    }
}

/// Unique, immutable record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier (assigned by the store on insert)
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// An id-less field bag: the editor's save output and the store's
/// insert/update input. Empty values are dropped on entry so "absent"
/// and "empty" cannot diverge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDraft {
    fields: HashMap<String, String>,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. A blank value removes the field instead.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, value);
        }
    }

    /// Builder-style `set`
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The value for `field`, if one is present.
    ///
    /// Deserialized drafts bypass `set`, so blank values are filtered
    /// here as well.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Names of all populated fields (unordered)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_fields(self) -> HashMap<String, String> {
        self.fields
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect()
    }
}

/// One rule entry: a schema-bound key/value set plus a unique identifier.
///
/// Construction validates the draft against the schema, so a `RuleRecord`
/// always holds every required field and no undeclared ones. The
/// identifier never changes once assigned; `created_at` survives updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    id: RecordId,
    fields: HashMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RuleRecord {
    /// Build a record from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the draft names a field outside the
    /// schema or leaves a required field empty.
    pub fn new(
        id: RecordId,
        schema: &RuleSchema,
        draft: RecordDraft,
        now: DateTime<Utc>,
    ) -> SchemaResult<Self> {
        DraftValidator::new(schema).validate(&draft)?;
        Ok(Self {
            id,
            fields: draft.into_fields(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Preserve the original creation time across an update
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The value for `field`; `None` for absent or empty values
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn has_value(&self, field: &str) -> bool {
        self.value(field).is_some()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
