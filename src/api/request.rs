//! API request types
//!
//! One JSON object per request, discriminated by `op`.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::record::{Field, RawRecord};
use crate::store::{RecordTarget, SortDirection};

/// How `list` renders the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    #[default]
    Json,
    Table,
}

/// Unified request envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Current collection
    List {
        #[serde(default)]
        format: ListFormat,
    },
    /// Validate and append a record
    Add { record: RawRecord },
    /// Validate and replace a record
    Update {
        target: RecordTarget,
        record: RawRecord,
    },
    /// Fetch one record without changing anything
    Preview { target: RecordTarget },
    /// Ask to delete a record; takes effect on `confirm_delete`
    Delete { target: RecordTarget },
    ConfirmDelete,
    CancelDelete,
    /// Case-insensitive search on id, name, email and course
    Search {
        #[serde(default)]
        term: String,
    },
    /// Sort by a column; without a direction the column's toggle decides
    Sort {
        field: Field,
        #[serde(default)]
        direction: Option<SortDirection>,
    },
    /// Operation counters
    Stats,
}

impl Request {
    /// Every accepted `op` value
    pub const OPERATIONS: [&'static str; 10] = [
        "list",
        "add",
        "update",
        "preview",
        "delete",
        "confirm_delete",
        "cancel_delete",
        "search",
        "sort",
        "stats",
    ];

    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parse a request from an already decoded JSON value
    pub fn from_value(value: Value) -> ApiResult<Self> {
        let op = value
            .get("op")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::invalid_request("Missing op"))?;

        if !Self::OPERATIONS.contains(&op) {
            return Err(ApiError::unknown_operation(op));
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::invalid_request(format!("Invalid request: {}", e)))
    }

    /// Returns the `op` name of this request
    pub fn op(&self) -> &'static str {
        match self {
            Request::List { .. } => "list",
            Request::Add { .. } => "add",
            Request::Update { .. } => "update",
            Request::Preview { .. } => "preview",
            Request::Delete { .. } => "delete",
            Request::ConfirmDelete => "confirm_delete",
            Request::CancelDelete => "cancel_delete",
            Request::Search { .. } => "search",
            Request::Sort { .. } => "sort",
            Request::Stats => "stats",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let request = Request::parse(
            r#"{"op":"add","record":{"id":"1004","name":"Neha","email":"n@e.com",
                "phone":"9123456780","course":"BCA","semester":"2","gpa":"3.9"}}"#,
        )
        .unwrap();

        match request {
            Request::Add { record } => {
                assert_eq!(record.id, "1004");
                assert_eq!(record.gpa, "3.9");
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_by_position() {
        let request =
            Request::parse(r#"{"op":"update","target":{"position":1},"record":{}}"#).unwrap();
        assert_eq!(
            request,
            Request::Update {
                target: RecordTarget::position(1),
                record: RawRecord::default(),
            }
        );
    }

    #[test]
    fn test_parse_sort_without_direction() {
        let request = Request::parse(r#"{"op":"sort","field":"gpa"}"#).unwrap();
        assert_eq!(
            request,
            Request::Sort {
                field: Field::Gpa,
                direction: None,
            }
        );
    }

    #[test]
    fn test_parse_unit_operations() {
        assert_eq!(
            Request::parse(r#"{"op":"confirm_delete"}"#).unwrap(),
            Request::ConfirmDelete
        );
        assert_eq!(Request::parse(r#"{"op":"stats"}"#).unwrap(), Request::Stats);
        assert_eq!(
            Request::parse(r#"{"op":"list"}"#).unwrap(),
            Request::List {
                format: ListFormat::Json
            }
        );
    }

    #[test]
    fn test_search_term_defaults_empty() {
        assert_eq!(
            Request::parse(r#"{"op":"search"}"#).unwrap(),
            Request::Search {
                term: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_operation() {
        let err = Request::parse(r#"{"op":"truncate"}"#).unwrap_err();
        assert_eq!(err.code(), "STUDENTDB_UNKNOWN_OPERATION");
    }

    #[test]
    fn test_missing_op() {
        let err = Request::parse(r#"{"term":"bca"}"#).unwrap_err();
        assert_eq!(err.code(), "STUDENTDB_INVALID_REQUEST");
    }

    #[test]
    fn test_missing_target() {
        let err = Request::parse(r#"{"op":"preview"}"#).unwrap_err();
        assert_eq!(err.code(), "STUDENTDB_INVALID_REQUEST");
    }

    #[test]
    fn test_malformed_json() {
        let err = Request::parse("{not json").unwrap_err();
        assert_eq!(err.code(), "STUDENTDB_INVALID_REQUEST");
    }

    #[test]
    fn test_parse_list_as_table() {
        let request = Request::parse(r#"{"op":"list","format":"table"}"#).unwrap();
        assert_eq!(
            request,
            Request::List {
                format: ListFormat::Table
            }
        );
        assert_eq!(request.op(), "list");
    }
}
