//! View Composer subsystem
//!
//! The headless controller behind the table and toolbar: initial load
//! with independent degradation, local filtering over the loaded
//! snapshot, write-access gating, editor lifecycle, save-then-refetch,
//! and CSV export. User-facing errors flow through a single notice
//! queue.

mod composer;
mod errors;
mod notify;

pub use composer::{ExportFile, RulesView, ViewConfig};
pub use errors::{ViewError, ViewResult};
pub use notify::{Notice, NoticeLevel};
