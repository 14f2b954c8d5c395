//! Record Repository subsystem
//!
//! The store owns the record collection and is the only component that
//! mutates it. Everything above it (filter engine, editor, view
//! composer) works on read snapshots and submits whole-record drafts.
//!
//! # Operations
//!
//! list / insert / update / delete / distinct_values / export_csv

mod errors;
mod export;
mod memory;
mod repository;

pub use errors::{StoreError, StoreResult};
pub use export::{EXPORT_FILENAME, EXPORT_MIME};
pub use memory::MemoryStore;
pub use repository::RuleStore;
