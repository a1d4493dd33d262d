//! Observability subsystem
//!
//! - Structured one-line JSON logs with typed events
//! - Relaxed atomic counters for the index
//!
//! Observability is read-only: a failed log write never fails the operation
//! being logged.
//!
//! ```ignore
//! use rosterdb::observability::{Event, Logger};
//!
//! Logger::emit(Event::SeedComplete, &[("stored", "365")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
