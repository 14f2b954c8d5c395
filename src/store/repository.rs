//! The rule store contract.

use async_trait::async_trait;

use crate::filter::FieldOption;
use crate::schema::{RecordDraft, RecordId, RuleRecord};

use super::errors::StoreResult;

/// Storage contract for rule records.
///
/// The store is an external collaborator that may be backed by a network
/// service, so every operation is asynchronous and may fail. It is the
/// sole mutable owner of the record collection: reads return snapshots,
/// writes take whole-record drafts.
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// All records, in insertion order
    async fn list(&self) -> StoreResult<Vec<RuleRecord>>;

    /// Validate `draft`, assign a fresh identifier, and append the record
    async fn insert(&self, draft: RecordDraft) -> StoreResult<RuleRecord>;

    /// Replace every field of the record with identifier `id`.
    ///
    /// The identifier and creation time are preserved; the record must
    /// already exist.
    async fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<RuleRecord>;

    /// Remove the record with identifier `id`, returning the id
    async fn delete(&self, id: RecordId) -> StoreResult<RecordId>;

    /// Distinct non-empty values observed for a schema field
    async fn distinct_values(&self, field: &str) -> StoreResult<Vec<FieldOption>>;

    /// The full collection encoded as CSV (see `store::export`)
    async fn export_csv(&self) -> StoreResult<String>;
}
