//! Index configuration

use std::time::Duration;

/// What a query does with a member that fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Leave the member out, log it, keep going
    #[default]
    SkipAndLog,
    /// Fail the whole query
    Fail,
}

/// Configuration for an [`IndexManager`](super::IndexManager).
#[derive(Debug, Clone, Default)]
pub struct IndexConfig {
    /// Budget for each individual store round trip. `None` waits forever.
    pub round_trip_timeout: Option<Duration>,
    pub malformed_policy: MalformedPolicy,
}

impl IndexConfig {
    pub fn with_round_trip_timeout(mut self, timeout: Duration) -> Self {
        self.round_trip_timeout = Some(timeout);
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.malformed_policy = policy;
        self
    }
}
