//! Filter Engine subsystem
//!
//! Conjunction-of-disjunctions faceted filtering: AND across fields,
//! OR within a field's accepted-value set. Pure functions over record
//! snapshots; no ordering beyond preserving input order.

mod engine;
mod selection;

pub use engine::FilterEngine;
pub use selection::{FieldOption, FilterSelection};
