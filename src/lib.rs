//! ruledesk - administration core for regulatory rule records
//!
//! A schema-bound record collection behind an injected store, with
//! faceted filtering, schema-driven edit sessions, a headless view
//! composer, a JSON HTTP surface, and CSV export.

pub mod cli;
pub mod config;
pub mod editor;
pub mod filter;
pub mod http;
pub mod observability;
pub mod schema;
pub mod store;
pub mod view;
