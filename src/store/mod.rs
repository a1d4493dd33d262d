//! Record store subsystem
//!
//! The index layer talks to its backing store only through [`RecordStore`]:
//! set add/members/intersect/cardinality and sorted-set add/range/cardinality.
//! [`MemoryStore`] is the bundled implementation, optionally persisted to a
//! checksummed snapshot file.
//!
//! # Invariants
//!
//! - Every primitive is one round trip bounded by a [`Deadline`]
//! - Set add and sorted-set add are idempotent
//! - Range reads ascend by (score, member)

mod backend;
mod deadline;
mod errors;
mod memory;
mod snapshot;
mod sorted;

pub use backend::RecordStore;
pub use deadline::Deadline;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sorted::{ScoreKey, SortedSet};
