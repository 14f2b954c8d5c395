//! HTTP subsystem
//!
//! The JSON surface the browser table talks to: the store contract plus
//! the CSV download. Write endpoints are gated by the write-access flag
//! (presentational, not authentication).

mod errors;
mod response;
mod server;

pub use errors::{HttpError, HttpResult};
pub use response::{DeleteResponse, ErrorBody, ListResponse, OptionsResponse, RecordResponse};
pub use server::ApiServer;
