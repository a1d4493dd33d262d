//! Record store trait
//!
//! The primitives of a Redis-like set/sorted-set store. Slot identifiers are
//! plain strings; members are encoded records.

use super::deadline::Deadline;
use super::errors::StoreResult;

/// Backend trait for the underlying set/sorted-set store.
///
/// Implementations are shared process-wide, so they must be safe for
/// concurrent use. Every call is one round trip bounded by `deadline`.
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Add `member` to an unordered set. Returns `true` if it was not present.
    fn set_add(&self, slot: &str, member: &str, deadline: Deadline) -> StoreResult<bool>;

    /// All members of a set, unspecified order. Missing slot reads as empty.
    fn set_members(&self, slot: &str, deadline: Deadline) -> StoreResult<Vec<String>>;

    /// Members present in every listed set, unspecified order.
    fn set_intersect(&self, slots: &[&str], deadline: Deadline) -> StoreResult<Vec<String>>;

    /// Number of members in a set
    fn set_card(&self, slot: &str, deadline: Deadline) -> StoreResult<usize>;

    /// Add or re-score `member` in a sorted collection.
    /// Returns `true` if it was not present. Non-finite scores are refused.
    fn zset_add(
        &self,
        slot: &str,
        member: &str,
        score: f64,
        deadline: Deadline,
    ) -> StoreResult<bool>;

    /// Members with `min <= score <= max`, ascending by (score, member).
    fn zset_range_by_score(
        &self,
        slot: &str,
        min: f64,
        max: f64,
        deadline: Deadline,
    ) -> StoreResult<Vec<String>>;

    /// Number of members in a sorted collection
    fn zset_card(&self, slot: &str, deadline: Deadline) -> StoreResult<usize>;
}
