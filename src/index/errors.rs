//! Query error types
//!
//! Error codes:
//! - ROSTER_STORE_UNAVAILABLE / ROSTER_STORE_TIMEOUT (from the store)
//! - ROSTER_MALFORMED_RECORD (only under `MalformedPolicy::Fail`)
//!
//! Writes report plain `StoreError`; only reads can hit a malformed member.

use thiserror::Error;

use crate::codec::MalformedRecordError;
use crate::store::StoreError;

/// Result type for index queries
pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// `slot` names every slot the member was read from, joined by `&`.
    #[error("Slot {slot} holds an undecodable member: {source}")]
    Malformed {
        slot: String,
        #[source]
        source: MalformedRecordError,
    },
}

impl QueryError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Store(e) => e.code(),
            QueryError::Malformed { source, .. } => source.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err: QueryError = StoreError::Unavailable("down".into()).into();
        assert_eq!(err.code(), "ROSTER_STORE_UNAVAILABLE");

        let err = QueryError::Malformed {
            slot: "roster:dob".to_string(),
            source: MalformedRecordError::new("bad"),
        };
        assert_eq!(err.code(), "ROSTER_MALFORMED_RECORD");
        assert!(err.to_string().contains("roster:dob"));
    }
}
