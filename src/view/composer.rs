//! The view composer behind the rules table.
//!
//! Orchestrates initial load, holds the current filter selection and
//! loaded snapshot, gates write actions, runs the editor lifecycle, and
//! produces the CSV download. Store calls run under a timeout, and
//! reloads carry a generation token: only the most recently issued
//! reload may apply its response.

use std::collections::HashMap;
use std::future::Future;
use std::mem;
use std::time::Duration;

use tokio::time::timeout;

use crate::editor::{EditSession, SaveRequest};
use crate::filter::{FieldOption, FilterEngine, FilterSelection};
use crate::observability::{Event, Logger};
use crate::schema::{RecordId, RuleRecord, RuleSchema};
use crate::store::{RuleStore, StoreResult, EXPORT_FILENAME, EXPORT_MIME};

use super::errors::{ViewError, ViewResult};
use super::notify::Notice;

/// View-level configuration
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Whether add/edit actions are allowed (presentational gate)
    pub write_access: bool,
    /// Upper bound on any single store call
    pub op_timeout: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            write_access: false,
            op_timeout: Duration::from_secs(5),
        }
    }
}

/// A produced CSV download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub mime: &'static str,
    pub content: String,
}

/// Table + toolbar orchestration over an injected store.
pub struct RulesView<S: RuleStore> {
    store: S,
    schema: RuleSchema,
    config: ViewConfig,
    records: Vec<RuleRecord>,
    options: HashMap<String, Vec<FieldOption>>,
    selection: FilterSelection,
    session: Option<EditSession>,
    notices: Vec<Notice>,
    generation: u64,
}

impl<S: RuleStore> RulesView<S> {
    pub fn new(store: S, config: ViewConfig) -> Self {
        Self {
            store,
            schema: RuleSchema::default(),
            config,
            records: Vec::new(),
            options: HashMap::new(),
            selection: FilterSelection::new(),
            session: None,
            notices: Vec::new(),
            generation: 0,
        }
    }

    pub fn schema(&self) -> &RuleSchema {
        &self.schema
    }

    /// Load the record list and, per schema field, the filter options.
    ///
    /// The two loads fail independently; either failure degrades to
    /// empty data and a notice rather than tearing down the view.
    pub async fn initialize(&mut self) {
        self.reload_records().await;
        self.reload_options().await;
    }

    /// Re-fetch the record list from the store
    pub async fn reload_records(&mut self) {
        self.generation += 1;
        let generation = self.generation;

        let result = self.guarded("list", self.store.list()).await;
        if generation != self.generation {
            // A newer reload owns the snapshot
            return;
        }

        match result {
            Ok(records) => {
                Logger::info(
                    Event::RecordsLoaded,
                    &[("count", &records.len().to_string())],
                );
                self.records = records;
            }
            Err(err) => {
                Logger::error(Event::RecordsLoadFailed, &[("error", &err.to_string())]);
                self.records.clear();
                self.notices
                    .push(Notice::error(format!("Failed to load rules: {}", err)));
            }
        }
    }

    /// Re-fetch the per-field filter options; each field degrades
    /// independently
    pub async fn reload_options(&mut self) {
        let mut failed: Vec<&str> = Vec::new();

        for field in self.schema.fields() {
            let result = self
                .guarded("distinct_values", self.store.distinct_values(field.name()))
                .await;
            match result {
                Ok(options) => {
                    self.options.insert(field.name().to_string(), options);
                }
                Err(err) => {
                    Logger::error(
                        Event::OptionsLoadFailed,
                        &[("field", field.name()), ("error", &err.to_string())],
                    );
                    self.options.insert(field.name().to_string(), Vec::new());
                    failed.push(field.name());
                }
            }
        }

        if failed.is_empty() {
            Logger::info(Event::OptionsLoaded, &[]);
        } else {
            self.notices.push(Notice::error(format!(
                "Failed to load filter options for: {}",
                failed.join(", ")
            )));
        }
    }

    /// The loaded snapshot, unfiltered
    pub fn records(&self) -> &[RuleRecord] {
        &self.records
    }

    /// Filter dropdown options for a field
    pub fn options(&self, field: &str) -> &[FieldOption] {
        self.options.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the accepted values for a field; recomputation is local
    pub fn set_filter(&mut self, field: impl Into<String>, values: Vec<String>) {
        self.selection.set(field, values);
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.selection.clear(field);
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The records currently visible under the filter selection
    pub fn visible_records(&self) -> Vec<RuleRecord> {
        FilterEngine::apply(&self.records, &self.selection)
    }

    /// Open a creation session. Rejected without write access.
    pub fn begin_add(&mut self) -> ViewResult<()> {
        self.ensure_write_access("add")?;
        self.session = Some(EditSession::create(self.schema));
        Logger::info(Event::EditorOpened, &[("mode", "create")]);
        Ok(())
    }

    /// Open an edit session on a loaded record. Rejected without write
    /// access.
    pub fn begin_edit(&mut self, id: RecordId) -> ViewResult<()> {
        self.ensure_write_access("edit")?;
        let record = self
            .records
            .iter()
            .find(|r| r.id() == id)
            .ok_or(ViewError::UnknownRecord(id))?;
        self.session = Some(EditSession::edit(self.schema, record));
        Logger::info(Event::EditorOpened, &[("mode", "edit"), ("id", &id.to_string())]);
        Ok(())
    }

    /// The open editor session, if any
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Discard the open session without saving
    pub fn cancel_edit(&mut self) {
        if self.session.take().is_some() {
            Logger::info(Event::EditorCancelled, &[]);
        }
    }

    /// Validate and commit the open session.
    ///
    /// On success the session closes and the record list is re-fetched
    /// (no optimistic merge). A store failure leaves the session open
    /// for retry; a validation failure never reaches the store.
    pub async fn submit(&mut self) -> ViewResult<()> {
        let session = self.session.as_ref().ok_or(ViewError::NoActiveSession)?;
        let request = session.save()?;

        let result = match request {
            SaveRequest::Insert(draft) => {
                let result = self.guarded("insert", self.store.insert(draft)).await;
                if let Ok(record) = &result {
                    Logger::info(Event::RecordInserted, &[("id", &record.id().to_string())]);
                }
                result
            }
            SaveRequest::Update(id, draft) => {
                let result = self.guarded("update", self.store.update(id, draft)).await;
                if result.is_ok() {
                    Logger::info(Event::RecordUpdated, &[("id", &id.to_string())]);
                }
                result
            }
        };

        match result {
            Ok(_) => {
                self.session = None;
                self.reload_records().await;
                Ok(())
            }
            Err(err) => {
                Logger::error(Event::SaveFailed, &[("error", &err.to_string())]);
                self.notices
                    .push(Notice::error("Error saving rule. Please try again."));
                Err(err)
            }
        }
    }

    /// Produce the CSV download
    pub async fn export(&mut self) -> ViewResult<ExportFile> {
        Logger::info(Event::ExportStart, &[]);
        match self.guarded("export_csv", self.store.export_csv()).await {
            Ok(content) => {
                Logger::info(
                    Event::ExportComplete,
                    &[("bytes", &content.len().to_string())],
                );
                Ok(ExportFile {
                    filename: EXPORT_FILENAME,
                    mime: EXPORT_MIME,
                    content,
                })
            }
            Err(err) => {
                Logger::error(Event::ExportFailed, &[("error", &err.to_string())]);
                self.notices
                    .push(Notice::error("Error extracting data. Please try again."));
                Err(err)
            }
        }
    }

    /// Drain pending user-facing notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        mem::take(&mut self.notices)
    }

    fn ensure_write_access(&mut self, action: &'static str) -> ViewResult<()> {
        if self.config.write_access {
            return Ok(());
        }
        Logger::warn(Event::WriteAccessDenied, &[("action", action)]);
        self.notices.push(Notice::warning(format!(
            "You do not have write access to {} rules.",
            action
        )));
        Err(ViewError::WriteAccessDenied)
    }

    async fn guarded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = StoreResult<T>>,
    ) -> ViewResult<T> {
        match timeout(self.config.op_timeout, call).await {
            Ok(result) => result.map_err(ViewError::from),
            Err(_) => Err(ViewError::Timeout {
                operation,
                timeout_ms: self.config.op_timeout.as_millis() as u64,
            }),
        }
    }
}
