//! API Handler for studentdb
//!
//! Plays the presentation layer's part: owns the UI state (sort toggles,
//! pending delete), forwards raw input to the store, logs outcomes and
//! turns results into responses.
//!
//! Requests run one at a time, each to completion.

use serde::Serialize;
use serde_json::{json, Value};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot};
use crate::presentation::{render_table, PendingDelete, SortToggle};
use crate::record::{Field, RawRecord};
use crate::store::{RecordStore, RecordTarget, SortDirection, SortSpec};

use super::errors::{ApiError, ApiResult};
use super::request::{ListFormat, Request};
use super::response::Response;

/// API Handler for a single session
pub struct ApiHandler {
    store: RecordStore,
    sort_toggle: SortToggle,
    pending_delete: PendingDelete,
    metrics: MetricsRegistry,
}

impl ApiHandler {
    /// Create a handler around a store
    pub fn new(store: RecordStore) -> Self {
        let metrics = MetricsRegistry::new();
        metrics.set_records(store.len());
        Self {
            store,
            sort_toggle: SortToggle::new(),
            pending_delete: PendingDelete::new(),
            metrics,
        }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns a snapshot of the session counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Handle a raw JSON request string
    pub fn handle(&mut self, json_request: &str) -> Response {
        match Request::parse(json_request) {
            Ok(request) => self.execute(request),
            Err(e) => self.reject("parse", e),
        }
    }

    /// Handle an already decoded JSON request
    pub fn handle_value(&mut self, value: Value) -> Response {
        match Request::from_value(value) {
            Ok(request) => self.execute(request),
            Err(e) => self.reject("parse", e),
        }
    }

    /// Execute a parsed request
    pub fn execute(&mut self, request: Request) -> Response {
        let op = request.op();
        let result = match request {
            Request::List { format } => self.handle_list(format),
            Request::Add { record } => self.handle_add(&record),
            Request::Update { target, record } => self.handle_update(&target, &record),
            Request::Preview { target } => self.handle_preview(&target),
            Request::Delete { target } => self.handle_delete(&target),
            Request::ConfirmDelete => self.handle_confirm_delete(),
            Request::CancelDelete => self.handle_cancel_delete(),
            Request::Search { term } => self.handle_search(&term),
            Request::Sort { field, direction } => self.handle_sort(field, direction),
            Request::Stats => encode(&self.metrics.snapshot()),
        };

        self.metrics.set_records(self.store.len());

        match result {
            Ok(data) => Response::success(data),
            Err(e) => self.reject(op, e),
        }
    }

    fn reject(&self, op: &str, err: ApiError) -> Response {
        self.metrics.increment_rejected();
        log_event_with_fields(
            Event::RequestRejected,
            &[("op", op), ("code", err.code()), ("message", err.message())],
        );
        Response::error(&err)
    }

    fn handle_list(&self, format: ListFormat) -> ApiResult<Value> {
        match format {
            ListFormat::Json => encode(&self.store.snapshot()),
            ListFormat::Table => Ok(Value::String(render_table(self.store.records()))),
        }
    }

    fn handle_add(&mut self, record: &RawRecord) -> ApiResult<Value> {
        let snapshot = self.store.add(record)?;
        self.metrics.increment_adds();

        let count = snapshot.len().to_string();
        let id = snapshot.ids().last().map(|id| id.to_string()).unwrap_or_default();
        log_event_with_fields(Event::RecordAdded, &[("id", id.as_str()), ("count", count.as_str())]);

        encode(&snapshot)
    }

    fn handle_update(&mut self, target: &RecordTarget, record: &RawRecord) -> ApiResult<Value> {
        let snapshot = self.store.update(target, record)?;
        self.metrics.increment_updates();

        let target = target.to_string();
        log_event_with_fields(
            Event::RecordUpdated,
            &[("target", target.as_str()), ("id", record.id.trim())],
        );

        encode(&snapshot)
    }

    fn handle_preview(&self, target: &RecordTarget) -> ApiResult<Value> {
        let record = self.store.preview(target)?;
        encode(record)
    }

    fn handle_delete(&mut self, target: &RecordTarget) -> ApiResult<Value> {
        let record = self.pending_delete.request(&self.store, target)?;
        log_event_with_fields(Event::DeleteRequested, &[("id", &record.id)]);
        Ok(json!({ "pending": record }))
    }

    fn handle_confirm_delete(&mut self) -> ApiResult<Value> {
        let id = self
            .pending_delete
            .pending()
            .map(|record| record.id.clone())
            .ok_or_else(ApiError::nothing_pending)?;

        let snapshot = self
            .pending_delete
            .confirm(&mut self.store)
            .ok_or_else(ApiError::nothing_pending)??;
        self.metrics.increment_deletes();

        let count = snapshot.len().to_string();
        log_event_with_fields(Event::RecordDeleted, &[("id", id.as_str()), ("count", count.as_str())]);

        encode(&snapshot)
    }

    fn handle_cancel_delete(&mut self) -> ApiResult<Value> {
        let record = self
            .pending_delete
            .cancel()
            .ok_or_else(ApiError::nothing_pending)?;
        log_event_with_fields(Event::DeleteCancelled, &[("id", &record.id)]);
        Ok(json!({ "cancelled": record }))
    }

    fn handle_search(&self, term: &str) -> ApiResult<Value> {
        let view = self.store.search(term);
        let snapshot = view.snapshot();
        self.metrics.increment_searches();

        let matches = snapshot.len().to_string();
        log_event_with_fields(
            Event::SearchExecuted,
            &[("term", view.term()), ("matches", matches.as_str())],
        );

        encode(&snapshot)
    }

    fn handle_sort(&mut self, field: Field, direction: Option<SortDirection>) -> ApiResult<Value> {
        let spec = match direction {
            Some(direction) => {
                let spec = SortSpec::new(field, direction);
                self.sort_toggle.set(spec);
                spec
            }
            None => self.sort_toggle.next(field),
        };

        let snapshot = self.store.sort_by(spec);
        self.metrics.increment_sorts();

        log_event_with_fields(
            Event::SortApplied,
            &[("field", field.as_str()), ("direction", spec.direction.as_str())],
        );

        Ok(json!({
            "field": field,
            "direction": spec.direction,
            "records": snapshot,
        }))
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SeededSource;
    use crate::validation::Validator;

    fn handler() -> ApiHandler {
        let store = RecordStore::open(Validator::new(), &mut SeededSource::new()).unwrap();
        ApiHandler::new(store)
    }

    fn ids(response: &Response) -> Vec<String> {
        let data = response.data().unwrap();
        let records = data.get("records").unwrap_or(data);
        records
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_list() {
        let mut handler = handler();
        let response = handler.handle(r#"{"op":"list"}"#);
        assert_eq!(ids(&response), vec!["1001", "1002", "1003"]);
    }

    #[test]
    fn test_list_table() {
        let mut handler = handler();
        let response = handler.handle(r#"{"op":"list","format":"table"}"#);
        let table = response.data().unwrap().as_str().unwrap();
        assert!(table.contains("Priya Singh"));
    }

    #[test]
    fn test_add_invalid_reports_fields() {
        let mut handler = handler();
        let response = handler.handle(
            r#"{"op":"add","record":{"id":"1001","name":"R@hul","email":"bad",
                "phone":"12345","course":"BCA","semester":"4","gpa":"3.5"}}"#,
        );

        let value = response.to_value().unwrap();
        assert_eq!(value["code"], "STUDENTDB_VALIDATION_FAILED");
        let fields = value["fields"].as_object().unwrap();
        let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["email", "name", "phone"]);
        assert_eq!(handler.metrics().rejected, 1);
    }

    #[test]
    fn test_sort_toggles_per_field() {
        let mut handler = handler();

        let first = handler.handle(r#"{"op":"sort","field":"gpa"}"#);
        assert_eq!(first.data().unwrap()["direction"], "asc");
        assert_eq!(ids(&first), vec!["1003", "1001", "1002"]);

        let second = handler.handle(r#"{"op":"sort","field":"gpa"}"#);
        assert_eq!(second.data().unwrap()["direction"], "desc");
        assert_eq!(ids(&second), vec!["1002", "1001", "1003"]);
    }

    #[test]
    fn test_explicit_direction_pins_toggle() {
        let mut handler = handler();
        handler.handle(r#"{"op":"sort","field":"id","direction":"desc"}"#);
        let next = handler.handle(r#"{"op":"sort","field":"id"}"#);
        assert_eq!(next.data().unwrap()["direction"], "asc");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut handler = handler();

        let pending = handler.handle(r#"{"op":"delete","target":{"position":0}}"#);
        assert_eq!(pending.data().unwrap()["pending"]["id"], "1001");
        assert_eq!(handler.store().len(), 3);

        let confirmed = handler.handle(r#"{"op":"confirm_delete"}"#);
        assert_eq!(ids(&confirmed), vec!["1002", "1003"]);
        assert_eq!(handler.metrics().deletes, 1);

        let again = handler.handle(r#"{"op":"confirm_delete"}"#);
        assert_eq!(again.error_code(), Some("STUDENTDB_NOTHING_PENDING"));
    }

    #[test]
    fn test_cancel_delete() {
        let mut handler = handler();
        handler.handle(r#"{"op":"delete","target":{"id":"1003"}}"#);

        let cancelled = handler.handle(r#"{"op":"cancel_delete"}"#);
        assert_eq!(cancelled.data().unwrap()["cancelled"]["id"], "1003");
        assert_eq!(handler.store().len(), 3);
    }

    #[test]
    fn test_update_missing_target() {
        let mut handler = handler();
        let response = handler.handle(r#"{"op":"update","target":{"id":"9999"},"record":{}}"#);
        assert_eq!(response.error_code(), Some("STUDENTDB_NOT_FOUND"));
    }

    #[test]
    fn test_search_and_stats() {
        let mut handler = handler();
        let found = handler.handle(r#"{"op":"search","term":"bca"}"#);
        assert_eq!(ids(&found), vec!["1001", "1002"]);

        let stats = handler.handle(r#"{"op":"stats"}"#);
        assert_eq!(stats.data().unwrap()["searches"], 1);
        assert_eq!(stats.data().unwrap()["records"], 3);
    }

    #[test]
    fn test_handle_value() {
        let mut handler = handler();
        let response = handler.handle_value(json!({"op": "preview", "target": {"position": 1}}));
        assert_eq!(response.data().unwrap()["name"], "Priya Singh");
    }
}
