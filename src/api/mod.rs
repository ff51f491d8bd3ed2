//! API Layer for studentdb
//!
//! The API Layer turns JSON requests into store operations for one
//! session and holds the session's presentation state.
//!
//! # Design Principles
//!
//! - One request at a time, run to completion
//! - Raw field text goes to the store untouched
//! - Error codes passed through unchanged
//! - Validation failures report every failing field
//!
//! # Supported Operations
//!
//! - list
//! - add
//! - update
//! - preview
//! - delete, confirm_delete, cancel_delete
//! - search
//! - sort
//! - stats

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::{ListFormat, Request};
pub use response::{ErrorResponse, Response, SuccessResponse};
