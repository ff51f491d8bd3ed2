//! Metrics registry for studentdb
//!
//! - Counters only, monotonic, reset on process start
//! - `records` tracks the current collection size

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters for a session
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    adds: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
    searches: AtomicU64,
    sorts: AtomicU64,
    rejected: AtomicU64,
    records: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_adds(&self) {
        self.adds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updates(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deletes(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sorts(&self) {
        self.sorts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Set the current record count
    pub fn set_records(&self, count: usize) {
        self.records.store(count as u64, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            adds: self.adds.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            sorts: self.sorts.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            records: self.records.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub adds: u64,
    pub updates: u64,
    pub deletes: u64,
    pub searches: u64,
    pub sorts: u64,
    pub rejected: u64,
    pub records: u64,
}
