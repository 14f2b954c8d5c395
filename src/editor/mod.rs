//! Record Editor subsystem
//!
//! Schema-driven edit sessions: a required prefix that is always on the
//! form, a user-selectable optional set, required-field validation on
//! save, and nothing committed except through `save`.

mod errors;
mod session;

pub use errors::{EditorError, EditorResult};
pub use session::{EditMode, EditSession, SaveRequest};
