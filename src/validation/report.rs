//! Structured validation results

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::record::Field;

/// Result of checking one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOutcome {
    Valid,
    Invalid(String),
}

impl FieldOutcome {
    /// Returns true if the field passed
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }

    /// Returns the failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Outcome for every field of a candidate record.
///
/// Ordered by column so rendering and error messages are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    outcomes: BTreeMap<Field, FieldOutcome>,
}

impl ValidationReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a rule for a field
    pub fn record<T>(&mut self, field: Field, result: &Result<T, &'static str>) {
        let outcome = match result {
            Ok(_) => FieldOutcome::Valid,
            Err(reason) => FieldOutcome::Invalid((*reason).to_string()),
        };
        self.outcomes.insert(field, outcome);
    }

    /// Returns true if no field failed
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(FieldOutcome::is_valid)
    }

    /// Returns the outcome for a field, if it was checked
    pub fn outcome(&self, field: Field) -> Option<&FieldOutcome> {
        self.outcomes.get(&field)
    }

    /// Returns the failure reason for a field
    pub fn reason(&self, field: Field) -> Option<&str> {
        self.outcomes.get(&field).and_then(FieldOutcome::reason)
    }

    /// Iterates failing fields with their reasons, in column order
    pub fn violations(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(field, outcome)| outcome.reason().map(|reason| (*field, reason)))
    }

    /// Returns the failing fields in column order
    pub fn violated_fields(&self) -> Vec<Field> {
        self.violations().map(|(field, _)| field).collect()
    }

    /// Returns failing fields mapped to their reasons
    pub fn violation_map(&self) -> BTreeMap<Field, String> {
        self.violations()
            .map(|(field, reason)| (field, reason.to_string()))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in self.violations() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, reason)?;
            first = false;
        }
        if first {
            write!(f, "all fields valid")?;
        }
        Ok(())
    }
}
