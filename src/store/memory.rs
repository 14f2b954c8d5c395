//! In-memory rule store.
//!
//! Reference implementation of the store contract: a `RwLock`'d vector
//! in insertion order. Stands in for a networked backend during
//! development and testing; nothing is persisted.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::filter::{FieldOption, FilterEngine};
use crate::schema::{RecordDraft, RecordId, RuleRecord, RuleSchema, SchemaError};

use super::errors::{StoreError, StoreResult};
use super::export;
use super::repository::RuleStore;

/// In-memory record collection behind the `RuleStore` contract.
pub struct MemoryStore {
    schema: RuleSchema,
    records: RwLock<Vec<RuleRecord>>,
}

impl MemoryStore {
    /// An empty store
    pub fn new() -> Self {
        Self {
            schema: RuleSchema::default(),
            records: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-populated with the reference rule set
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut records = store.records.write().expect("fresh lock cannot be poisoned");
            for draft in seed_drafts() {
                let record =
                    RuleRecord::new(RecordId::generate(), &store.schema, draft, Utc::now())
                        .expect("seed rules satisfy the schema");
                records.push(record);
            }
        }
        store
    }

    pub fn schema(&self) -> &RuleSchema {
        &self.schema
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<RuleRecord>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<RuleRecord>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuleStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<RuleRecord>> {
        Ok(self.read()?.clone())
    }

    async fn insert(&self, draft: RecordDraft) -> StoreResult<RuleRecord> {
        let record = RuleRecord::new(RecordId::generate(), &self.schema, draft, Utc::now())?;
        self.write()?.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<RuleRecord> {
        let replacement = RuleRecord::new(id, &self.schema, draft, Utc::now())?;

        let mut records = self.write()?;
        let existing = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        let replacement = replacement.with_created_at(existing.created_at());
        *existing = replacement.clone();
        Ok(replacement)
    }

    async fn delete(&self, id: RecordId) -> StoreResult<RecordId> {
        let mut records = self.write()?;
        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        records.remove(position);
        Ok(id)
    }

    async fn distinct_values(&self, field: &str) -> StoreResult<Vec<FieldOption>> {
        if !self.schema.contains(field) {
            return Err(SchemaError::UnknownField(field.to_string()).into());
        }
        Ok(FilterEngine::distinct_values(&self.read()?, field))
    }

    async fn export_csv(&self) -> StoreResult<String> {
        Ok(export::encode(&self.schema, &self.read()?))
    }
}

/// Reference rule set, ported from the mock data the table was
/// developed against.
fn seed_drafts() -> Vec<RecordDraft> {
    vec![
        RecordDraft::new()
            .with("Rule Type", "Standard")
            .with("MD State", "NY")
            .with("Ship to State", "CA")
            .with("Zip Code", "90210")
            .with("Channel", "Retail")
            .with("Reg Cat Code", "RC001")
            .with("Drug Schedule", "II")
            .with("Refill #", "0")
            .with("Quantity", "30")
            .with("Days Supply", "30")
            .with("User Location", "Store")
            .with("Dispensing Location", "Pharmacy")
            .with("Protocol", "Standard")
            .with("Days Ago", "0")
            .with("Max Days Supply", "30")
            .with("Max Quantity", "30")
            .with("Max Refill", "0")
            .with("Max Days Allowed to Expiry Date", "365"),
        RecordDraft::new()
            .with("Rule Type", "Controlled")
            .with("MD State", "CA")
            .with("Ship to State", "CA")
            .with("Zip Code", "94105")
            .with("Channel", "Mail")
            .with("Reg Cat Code", "RC002")
            .with("Drug Schedule", "III")
            .with("Quantity", "90")
            .with("Days Supply", "90")
            .with("Max Refill", "5"),
        RecordDraft::new()
            .with("Rule Type", "Standard")
            .with("MD State", "TX")
            .with("Ship to State", "NM")
            .with("Zip Code", "87501")
            .with("Channel", "Retail")
            .with("Reg Cat Code", "RC001")
            .with("Protocol", "Expedited"),
    ]
}
