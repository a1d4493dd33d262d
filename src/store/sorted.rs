//! Sorted collection keyed by `f64` score
//!
//! Members are ordered by (score, member) like a Redis sorted set. Scores are
//! mapped onto `u64` so that the BTree sees a total order.

use std::collections::{BTreeSet, HashMap};
use std::ops::Bound;

/// Order-preserving bit image of a finite `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreKey(u64);

impl ScoreKey {
    /// Map a score to its key. `-0.0` and `0.0` share a key.
    pub fn from_score(v: f64) -> Self {
        let v = if v == 0.0 { 0.0 } else { v };
        let bits = v.to_bits();
        // Negative: flip all bits. Positive: flip the sign bit.
        let ordered = if (bits >> 63) == 1 {
            !bits
        } else {
            bits ^ (1 << 63)
        };
        ScoreKey(ordered)
    }
}

/// A sorted set of string members.
#[derive(Debug, Default, Clone)]
pub struct SortedSet {
    ranked: BTreeSet<(ScoreKey, String)>,
    scores: HashMap<String, f64>,
}

impl SortedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or re-score a member. Returns `true` if the member is new.
    ///
    /// Callers reject non-finite scores before getting here.
    pub fn insert(&mut self, member: &str, score: f64) -> bool {
        match self.scores.get(member).copied() {
            Some(old) if ScoreKey::from_score(old) == ScoreKey::from_score(score) => false,
            Some(old) => {
                self.ranked
                    .remove(&(ScoreKey::from_score(old), member.to_string()));
                self.ranked
                    .insert((ScoreKey::from_score(score), member.to_string()));
                self.scores.insert(member.to_string(), score);
                false
            }
            None => {
                self.ranked
                    .insert((ScoreKey::from_score(score), member.to_string()));
                self.scores.insert(member.to_string(), score);
                true
            }
        }
    }

    /// Members with `min <= score <= max`, ascending.
    ///
    /// An inverted or NaN range is empty.
    pub fn range_by_score(&self, min: f64, max: f64) -> Vec<String> {
        if min.is_nan() || max.is_nan() || min > max {
            return Vec::new();
        }
        let lower = (ScoreKey::from_score(min), String::new());
        let upper = ScoreKey::from_score(max);

        self.ranked
            .range((Bound::Included(lower), Bound::Unbounded))
            .take_while(|(key, _)| *key <= upper)
            .map(|(_, member)| member.clone())
            .collect()
    }

    pub fn score(&self, member: &str) -> Option<f64> {
        self.scores.get(member).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// (member, score) pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranked
            .iter()
            .map(move |(_, member)| (member.as_str(), self.scores[member]))
    }
}
