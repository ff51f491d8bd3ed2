//! Record sorting
//!
//! Numeric columns (id, semester, gpa) compare by value, text columns
//! compare case-insensitively. The sort is stable in both directions:
//! records with equal keys keep their relative order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::record::{Field, StudentRecord};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column and direction to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: Field, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: Field) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: Field) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Sorts records
pub struct RecordSorter;

impl RecordSorter {
    /// Sorts records in place according to the spec.
    pub fn sort(records: &mut [StudentRecord], spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = Self::compare(a, b, spec.field);
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Compares two records on a single column.
    pub fn compare(a: &StudentRecord, b: &StudentRecord, field: Field) -> Ordering {
        match field {
            Field::Id => compare_digits(&a.id, &b.id),
            Field::Semester => a.semester.cmp(&b.semester),
            Field::Gpa => a.gpa.total_cmp(&b.gpa),
            Field::Name => compare_text(&a.name, &b.name),
            Field::Email => compare_text(&a.email, &b.email),
            Field::Phone => compare_text(&a.phone, &b.phone),
            Field::Course => compare_text(&a.course, &b.course),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric comparison of ASCII digit strings of any length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
