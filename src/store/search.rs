//! Free-text search over the collection
//!
//! Case-insensitive substring match on id, name, email and course.
//! A blank term matches everything.

use super::snapshot::Snapshot;
use crate::record::{Field, StudentRecord};

/// Matches records against a search term
pub struct SearchFilter;

impl SearchFilter {
    /// Normalizes a raw term for matching
    pub fn normalize(term: &str) -> String {
        term.trim().to_lowercase()
    }

    /// Checks a record against an already normalized term
    pub fn matches(record: &StudentRecord, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        Field::SEARCHABLE
            .iter()
            .any(|&field| Self::field_contains(record, field, needle))
    }

    fn field_contains(record: &StudentRecord, field: Field, needle: &str) -> bool {
        let haystack = match field {
            Field::Id => &record.id,
            Field::Name => &record.name,
            Field::Email => &record.email,
            Field::Course => &record.course,
            // Only text columns are searchable
            _ => return false,
        };
        haystack.to_lowercase().contains(needle)
    }
}

/// Lazily filtered view over the collection.
///
/// Borrowing the store keeps it from changing while the view lives.
/// Each call to `iter` starts a fresh pass.
#[derive(Debug, Clone)]
pub struct SearchView<'a> {
    records: &'a [StudentRecord],
    needle: String,
}

impl<'a> SearchView<'a> {
    /// Creates a view of `records` filtered by `term`
    pub fn new(records: &'a [StudentRecord], term: &str) -> Self {
        Self {
            records,
            needle: SearchFilter::normalize(term),
        }
    }

    /// Returns the normalized term
    pub fn term(&self) -> &str {
        &self.needle
    }

    /// Iterates matching records in collection order
    pub fn iter(&self) -> impl Iterator<Item = &'a StudentRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| SearchFilter::matches(record, &self.needle))
    }

    /// Counts matching records
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Copies the matches into a snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.iter().cloned().collect())
    }
}
