//! Record sources
//!
//! The store never owns persistence. Whatever keeps records between
//! sessions sits behind `RecordSource`, and the store calls `load` once
//! at startup and `save` when asked to.

use thiserror::Error;

use super::types::StudentRecord;

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Record source errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}

/// External collaborator that supplies and accepts record collections.
pub trait RecordSource {
    /// Returns the records to start a session with
    fn load(&mut self) -> SourceResult<Vec<StudentRecord>>;

    /// Accepts the current collection
    fn save(&mut self, records: &[StudentRecord]) -> SourceResult<()>;
}

/// In-memory source that falls back to the sample records when empty.
#[derive(Debug, Clone)]
pub struct SeededSource {
    saved: Vec<StudentRecord>,
    seed: bool,
}

impl SeededSource {
    /// Source that yields the sample records until something is saved
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            seed: true,
        }
    }

    /// Source that starts empty
    pub fn unseeded() -> Self {
        Self {
            saved: Vec::new(),
            seed: false,
        }
    }

    /// Returns the last saved collection
    pub fn saved(&self) -> &[StudentRecord] {
        &self.saved
    }
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for SeededSource {
    fn load(&mut self) -> SourceResult<Vec<StudentRecord>> {
        if self.saved.is_empty() && self.seed {
            return Ok(sample_records());
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, records: &[StudentRecord]) -> SourceResult<()> {
        self.saved = records.to_vec();
        Ok(())
    }
}

/// The three records a fresh session starts with.
pub fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            id: "1001".into(),
            name: "Rahul Kumar".into(),
            email: "rahul.kumar@email.com".into(),
            phone: "9876543210".into(),
            course: "BCA".into(),
            semester: 4,
            gpa: 3.5,
        },
        StudentRecord {
            id: "1002".into(),
            name: "Priya Singh".into(),
            email: "priya.singh@email.com".into(),
            phone: "8765432109".into(),
            course: "BCA".into(),
            semester: 3,
            gpa: 3.8,
        },
        StudentRecord {
            id: "1003".into(),
            name: "Amit Patel".into(),
            email: "amit.patel@email.com".into(),
            phone: "7654321098".into(),
            course: "B.Tech".into(),
            semester: 5,
            gpa: 3.2,
        },
    ]
}
