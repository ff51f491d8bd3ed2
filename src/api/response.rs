//! API response types
//!
//! JSON response formatting for all operations.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::errors::ApiError;
use crate::record::Field;

/// Success response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessResponse {
    pub status: &'static str,
    pub data: Value,
}

impl SuccessResponse {
    /// Create a new success response
    pub fn new(data: Value) -> Self {
        Self { status: "ok", data }
    }
}

/// Error response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<Field, String>>,
}

impl ErrorResponse {
    /// Create from an API error
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error",
            code: err.code().to_string(),
            message: err.message().to_string(),
            fields: err.fields().cloned(),
        }
    }
}

/// Unified response type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a success response
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Returns the payload of a success response
    pub fn data(&self) -> Option<&Value> {
        match self {
            Response::Success(r) => Some(&r.data),
            Response::Error(_) => None,
        }
    }

    /// Returns the error code of an error response
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.code),
        }
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use crate::validation::ValidationReport;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let response = Response::success(json!([1, 2]));
        assert!(response.is_success());
        assert_eq!(
            response.to_value().unwrap(),
            json!({"status": "ok", "data": [1, 2]})
        );
    }

    #[test]
    fn test_error_shape_without_fields() {
        let response = Response::error(&ApiError::nothing_pending());
        let value = response.to_value().unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "STUDENTDB_NOTHING_PENDING");
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_error_shape_with_fields() {
        let mut report = ValidationReport::new();
        report.record::<()>(Field::Name, &Err("Name should contain only letters"));
        let err = ApiError::from(StoreError::Validation(report));

        let value = Response::error(&err).to_value().unwrap();
        assert_eq!(value["code"], "STUDENTDB_VALIDATION_FAILED");
        assert_eq!(value["fields"]["name"], "Name should contain only letters");
    }
}
