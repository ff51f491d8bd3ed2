//! Observable events for studentdb
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in a studentdb session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Session startup begins
    SessionStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Initial records loaded from the record source
    RecordsLoaded,
    /// Session ready for requests
    Serving,
    /// Session finished
    SessionEnd,

    // Mutations
    /// Record appended
    RecordAdded,
    /// Record replaced in place
    RecordUpdated,
    /// Record removed
    RecordDeleted,
    /// Delete awaiting confirmation
    DeleteRequested,
    /// Pending delete dropped
    DeleteCancelled,

    // Queries
    /// Search view produced
    SearchExecuted,
    /// Collection reordered
    SortApplied,

    // Failures
    /// Request failed validation, lookup or parsing
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RecordsLoaded => "RECORDS_LOADED",
            Event::Serving => "STUDENTDB_SERVING",
            Event::SessionEnd => "SESSION_END",

            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::DeleteRequested => "DELETE_REQUESTED",
            Event::DeleteCancelled => "DELETE_CANCELLED",

            Event::SearchExecuted => "SEARCH_EXECUTED",
            Event::SortApplied => "SORT_APPLIED",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestRejected => Severity::Warn,
            Event::SearchExecuted | Event::SortApplied => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
