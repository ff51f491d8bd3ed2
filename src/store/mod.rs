//! Record Store subsystem for studentdb
//!
//! Holds the authoritative collection and serves every mutation and query.
//!
//! # Operations
//!
//! - add: validate, reject duplicate ids, append
//! - update: locate, validate, reject id collisions, replace in place
//! - preview / delete: look up, then remove as a separate step
//! - search: case-insensitive filtered view, never mutates
//! - sort_by: stable reorder by one column
//!
//! # Record lifecycle
//!
//! `nonexistent -> active` on add, `active -> active` on update,
//! `active -> removed` on delete. Updating or deleting anything that is
//! not active yields `NotFound`.
//!
//! The store performs no logging. Callers decide what to report.

mod errors;
mod search;
mod snapshot;
mod sorter;
mod store;
mod target;

pub use errors::{StoreError, StoreResult};
pub use search::{SearchFilter, SearchView};
pub use snapshot::Snapshot;
pub use sorter::{RecordSorter, SortDirection, SortSpec};
pub use store::RecordStore;
pub use target::RecordTarget;
