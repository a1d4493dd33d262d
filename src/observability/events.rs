//! Observable events
//!
//! Every log line names one of these. Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    ConfigLoaded,
    SnapshotLoaded,
    SnapshotSaved,

    // Writes
    RecordStored,
    /// A fan-out write stopped part way; earlier slot writes remain
    StoreFailed,

    // Reads
    QueryExecuted,
    QueryFailed,
    /// A slot member failed to decode and was left out of the result
    MemberSkipped,

    // Seeding
    SeedBegin,
    SeedComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SnapshotLoaded => "SNAPSHOT_LOADED",
            Event::SnapshotSaved => "SNAPSHOT_SAVED",
            Event::RecordStored => "RECORD_STORED",
            Event::StoreFailed => "STORE_FAILED",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryFailed => "QUERY_FAILED",
            Event::MemberSkipped => "MEMBER_SKIPPED",
            Event::SeedBegin => "SEED_BEGIN",
            Event::SeedComplete => "SEED_COMPLETE",
        }
    }

    /// Default severity when logged through `Logger::emit`
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordStored | Event::QueryExecuted => Severity::Trace,
            Event::MemberSkipped => Severity::Warn,
            Event::StoreFailed | Event::QueryFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
