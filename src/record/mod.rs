//! Student record model
//!
//! - `RawRecord`: untrusted text straight from a form
//! - `StudentRecord`: a record whose fields passed validation
//! - `RecordSource`: where a session's records come from

mod source;
mod types;

pub use source::{sample_records, RecordSource, SeededSource, SourceError, SourceResult};
pub use types::{Field, RawRecord, StudentRecord};
