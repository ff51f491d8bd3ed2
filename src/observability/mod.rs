//! Observability subsystem for studentdb
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Operation counters
//! - Typed lifecycle and operation events
//!
//! Observability is read-only: it never changes what an operation does,
//! and the record store itself never logs.
//!
//! # Usage
//!
//! ```ignore
//! use studentdb::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::RecordAdded, &[("id", "1004")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_adds();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
