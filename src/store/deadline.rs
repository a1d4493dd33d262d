//! Per-round-trip deadlines

use std::time::{Duration, Instant};

use super::errors::{StoreError, StoreResult};

/// Point in time by which a single store round trip must finish.
///
/// `Deadline::none()` never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// A deadline that never expires
    pub fn none() -> Self {
        Self {
            started: Instant::now(),
            budget: None,
        }
    }

    /// A deadline `budget` from now
    pub fn after(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget: Some(budget),
        }
    }

    /// Deadline from an optional budget
    pub fn from_budget(budget: Option<Duration>) -> Self {
        match budget {
            Some(b) => Self::after(b),
            None => Self::none(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.budget {
            Some(budget) => self.started.elapsed() >= budget,
            None => false,
        }
    }

    /// Time left before expiry; `None` when unbounded
    pub fn remaining(&self) -> Option<Duration> {
        self.budget
            .map(|budget| budget.saturating_sub(self.started.elapsed()))
    }

    /// Fail with `Timeout` if the deadline has passed.
    pub fn check(&self, operation: &'static str) -> StoreResult<()> {
        if self.is_expired() {
            return Err(StoreError::Timeout {
                operation,
                budget: self.budget.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
