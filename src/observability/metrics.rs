//! Index counters
//!
//! Counters only, monotonic, relaxed atomics. Values are exact but a reader
//! racing a writer may see one counter updated before another.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    records_stored: AtomicU64,
    slot_writes: AtomicU64,
    store_failures: AtomicU64,
    queries_executed: AtomicU64,
    queries_failed: AtomicU64,
    members_returned: AtomicU64,
    members_skipped: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A completed fan-out write
    pub fn increment_records_stored(&self) {
        self.records_stored.fetch_add(1, Ordering::Relaxed);
    }

    /// One slot mutated, whether or not the whole fan-out finishes
    pub fn increment_slot_writes(&self) {
        self.slot_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_failures(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_failed(&self) {
        self.queries_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_members_returned(&self, n: u64) {
        self.members_returned.fetch_add(n, Ordering::Relaxed);
    }

    pub fn increment_members_skipped(&self) {
        self.members_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_stored: self.records_stored.load(Ordering::Relaxed),
            slot_writes: self.slot_writes.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_failed: self.queries_failed.load(Ordering::Relaxed),
            members_returned: self.members_returned.load(Ordering::Relaxed),
            members_skipped: self.members_skipped.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_stored: u64,
    pub slot_writes: u64,
    pub store_failures: u64,
    pub queries_executed: u64,
    pub queries_failed: u64,
    pub members_returned: u64,
    pub members_skipped: u64,
}
