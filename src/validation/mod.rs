//! Validation subsystem for studentdb
//!
//! Validation is pure. It reports, for each field of a candidate, either
//! that the field is valid or why it is not, and leaves rendering of those
//! reasons to the caller.
//!
//! # Design Principles
//!
//! - Every field checked on every call
//! - One rule set shared by add and update
//! - No coercion beyond trimming surrounding whitespace
//! - Deterministic output

pub mod rules;
mod report;
mod validator;

pub use report::{FieldOutcome, ValidationReport};
pub use validator::Validator;
