//! Store error types
//!
//! Error codes:
//! - ROSTER_STORE_UNAVAILABLE
//! - ROSTER_STORE_TIMEOUT
//! - ROSTER_STORE_INVALID_SCORE
//! - ROSTER_SNAPSHOT_CORRUPTED

use std::time::Duration;

use thiserror::Error;

/// Result type for store round trips
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the underlying set/sorted-set store.
///
/// None of these are retried by the index layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store round trip '{operation}' exceeded its deadline ({budget:?})")]
    Timeout {
        operation: &'static str,
        budget: Duration,
    },

    #[error("Invalid score for sorted collection: {0}")]
    InvalidScore(f64),

    #[error("Snapshot corrupted: {0}")]
    SnapshotCorrupted(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) | StoreError::Io(_) => "ROSTER_STORE_UNAVAILABLE",
            StoreError::Timeout { .. } => "ROSTER_STORE_TIMEOUT",
            StoreError::InvalidScore(_) => "ROSTER_STORE_INVALID_SCORE",
            StoreError::SnapshotCorrupted(_) => "ROSTER_SNAPSHOT_CORRUPTED",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, StoreError::Timeout { .. })
    }
}
