//! API error types
//!
//! API errors are pass-through: store failures keep their own codes,
//! and validation failures keep their per-field reasons.

use std::collections::BTreeMap;
use std::fmt;

use crate::record::Field;
use crate::store::StoreError;

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request is not valid JSON or misses a required key
    InvalidRequest,
    /// `op` names no known operation
    UnknownOperation,
    /// Confirm or cancel with no delete pending
    NothingPending,
    /// Response could not be encoded
    Internal,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "STUDENTDB_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "STUDENTDB_UNKNOWN_OPERATION",
            ApiErrorCode::NothingPending => "STUDENTDB_NOTHING_PENDING",
            ApiErrorCode::Internal => "STUDENTDB_INTERNAL",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error with preserved subsystem error information
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code string (from the store or the API)
    code: String,
    /// Error message
    message: String,
    /// Failing fields with reasons, for validation failures
    fields: Option<BTreeMap<Field, String>>,
}

impl ApiError {
    fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code().to_string(),
            message: message.into(),
            fields: None,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InvalidRequest, reason)
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::UnknownOperation,
            format!("Unknown operation: {}", op.into()),
        )
    }

    /// Create a nothing-pending error
    pub fn nothing_pending() -> Self {
        Self::new(ApiErrorCode::NothingPending, "No delete is awaiting confirmation")
    }

    /// Create an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, reason)
    }

    /// Create from a store error (pass-through)
    pub fn from_store_error(err: StoreError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            fields: err.report().map(|report| report.violation_map()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns failing fields for validation errors
    pub fn fields(&self) -> Option<&BTreeMap<Field, String>> {
        self.fields.as_ref()
    }

    /// API errors are always recoverable
    pub fn is_fatal(&self) -> bool {
        false
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::from_store_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
