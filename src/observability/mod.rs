//! Observability subsystem
//!
//! Typed lifecycle events and a synchronous structured logger with
//! deterministic output. No error in this service is fatal to the
//! process, so the severity scale stops at ERROR.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
