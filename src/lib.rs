//! studentdb - a strict, in-memory student record manager
//!
//! Records are validated field by field before they enter the store, ids
//! stay unique, and insertion order holds until a sort is requested.

pub mod api;
pub mod cli;
pub mod observability;
pub mod presentation;
pub mod record;
pub mod store;
pub mod validation;
