//! Observable events for the rules table service.
//!
//! Events are explicit and typed; each log line names exactly one.

use std::fmt;

/// Observable events across the service lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server accepting requests
    ServerStart,
    /// HTTP server stopped
    ServerStop,

    // Loading
    /// Record list loaded into the view
    RecordsLoaded,
    /// Record list fetch failed; view degrades to empty data
    RecordsLoadFailed,
    /// Filter options loaded for every schema field
    OptionsLoaded,
    /// Option fetch failed for one or more fields
    OptionsLoadFailed,

    // Editing
    /// An edit session was opened
    EditorOpened,
    /// An edit session was discarded without saving
    EditorCancelled,
    /// A record was inserted
    RecordInserted,
    /// A record was updated in place
    RecordUpdated,
    /// A record was deleted
    RecordDeleted,
    /// Insert/update rejected by the store
    SaveFailed,

    // Export
    /// CSV export requested
    ExportStart,
    /// CSV export produced
    ExportComplete,
    /// CSV export failed
    ExportFailed,

    // Gating
    /// A write action was rejected for lack of write access
    WriteAccessDenied,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",

            Event::RecordsLoaded => "RECORDS_LOADED",
            Event::RecordsLoadFailed => "RECORDS_LOAD_FAILED",
            Event::OptionsLoaded => "OPTIONS_LOADED",
            Event::OptionsLoadFailed => "OPTIONS_LOAD_FAILED",

            Event::EditorOpened => "EDITOR_OPENED",
            Event::EditorCancelled => "EDITOR_CANCELLED",
            Event::RecordInserted => "RECORD_INSERTED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::SaveFailed => "SAVE_FAILED",

            Event::ExportStart => "EXPORT_START",
            Event::ExportComplete => "EXPORT_COMPLETE",
            Event::ExportFailed => "EXPORT_FAILED",

            Event::WriteAccessDenied => "WRITE_ACCESS_DENIED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_case() {
        let events = [
            Event::ConfigLoaded,
            Event::ServerStart,
            Event::ServerStop,
            Event::RecordsLoaded,
            Event::RecordsLoadFailed,
            Event::OptionsLoaded,
            Event::OptionsLoadFailed,
            Event::EditorOpened,
            Event::EditorCancelled,
            Event::RecordInserted,
            Event::RecordUpdated,
            Event::RecordDeleted,
            Event::SaveFailed,
            Event::ExportStart,
            Event::ExportComplete,
            Event::ExportFailed,
            Event::WriteAccessDenied,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::RecordsLoaded), "RECORDS_LOADED");
        assert_eq!(format!("{}", Event::WriteAccessDenied), "WRITE_ACCESS_DENIED");
    }
}
