//! Codec error types
//!
//! Error codes:
//! - ROSTER_MALFORMED_RECORD

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, MalformedRecordError>;

/// A stored member could not be decoded into a complete record.
///
/// Indicates corruption or drift of data already in the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed record: {reason}")]
pub struct MalformedRecordError {
    reason: String,
}

impl MalformedRecordError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        "ROSTER_MALFORMED_RECORD"
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<serde_json::Error> for MalformedRecordError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
