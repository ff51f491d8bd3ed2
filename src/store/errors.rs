//! # Store Errors
//!
//! Every store error is recoverable. The store is left exactly as it was
//! before the failed operation.

use thiserror::Error;

use super::target::RecordTarget;
use crate::record::SourceError;
use crate::validation::ValidationReport;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// One or more field rules failed
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// Identifier already used by a different record
    #[error("Student ID already exists: {0}")]
    DuplicateId(String),

    /// No record at the target
    #[error("Record not found at {0}")]
    NotFound(RecordTarget),

    /// The record source refused to load or save
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl StoreError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "STUDENTDB_VALIDATION_FAILED",
            StoreError::DuplicateId(_) => "STUDENTDB_DUPLICATE_ID",
            StoreError::NotFound(_) => "STUDENTDB_NOT_FOUND",
            StoreError::Source(_) => "STUDENTDB_SOURCE_FAILED",
        }
    }

    /// Returns the validation report for validation failures
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            StoreError::Validation(report) => Some(report),
            _ => None,
        }
    }

    /// Store errors never leave the store unusable
    pub fn is_fatal(&self) -> bool {
        false
    }
}

impl From<ValidationReport> for StoreError {
    fn from(report: ValidationReport) -> Self {
        StoreError::Validation(report)
    }
}
