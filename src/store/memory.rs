//! In-memory record store
//!
//! A thread-safe implementation of every [`RecordStore`] primitive. Sets and
//! sorted collections live in separate namespaces, so a slot name can refer to
//! one of each without conflict.
//!
//! The store has an explicit lifecycle: it is usable from construction until
//! [`MemoryStore::close`], after which every round trip fails with
//! `Unavailable`.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::backend::RecordStore;
use super::deadline::Deadline;
use super::errors::{StoreError, StoreResult};
use super::snapshot::{self, SlotSnapshot};
use super::sorted::SortedSet;

#[derive(Debug, Default)]
pub(crate) struct Slots {
    pub(crate) sets: HashMap<String, HashSet<String>>,
    pub(crate) zsets: HashMap<String, SortedSet>,
}

/// Process-local set/sorted-set store.
#[derive(Debug)]
pub struct MemoryStore {
    slots: RwLock<Slots>,
    open: AtomicBool,
}

impl MemoryStore {
    /// Creates an open, empty store
    pub fn new() -> Self {
        Self::from_slots(Slots::default())
    }

    fn from_slots(slots: Slots) -> Self {
        Self {
            slots: RwLock::new(slots),
            open: AtomicBool::new(true),
        }
    }

    /// Open a store from a snapshot file.
    ///
    /// A missing file yields an empty store; a corrupted one is refused.
    pub fn load(path: &Path) -> StoreResult<Self> {
        match snapshot::read(path)? {
            Some(snap) => Ok(Self::from_slots(snap.into_slots()?)),
            None => Ok(Self::new()),
        }
    }

    /// Persist every slot to `path`.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let snap = {
            let slots = self.read_slots(Deadline::none(), "SAVE")?;
            SlotSnapshot::from_slots(&slots)
        };
        snapshot::write(path, &snap)
    }

    /// Close the store. Later round trips fail with `Unavailable`.
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if !self.is_open() {
            return Err(StoreError::Unavailable("store is closed".to_string()));
        }
        Ok(())
    }

    fn read_slots(
        &self,
        deadline: Deadline,
        operation: &'static str,
    ) -> StoreResult<RwLockReadGuard<'_, Slots>> {
        self.ensure_open()?;
        deadline.check(operation)?;
        let guard = self
            .slots
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        deadline.check(operation)?;
        Ok(guard)
    }

    fn write_slots(
        &self,
        deadline: Deadline,
        operation: &'static str,
    ) -> StoreResult<RwLockWriteGuard<'_, Slots>> {
        self.ensure_open()?;
        deadline.check(operation)?;
        let guard = self
            .slots
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        deadline.check(operation)?;
        Ok(guard)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn set_add(&self, slot: &str, member: &str, deadline: Deadline) -> StoreResult<bool> {
        let mut slots = self.write_slots(deadline, "SET_ADD")?;
        Ok(slots
            .sets
            .entry(slot.to_string())
            .or_default()
            .insert(member.to_string()))
    }

    fn set_members(&self, slot: &str, deadline: Deadline) -> StoreResult<Vec<String>> {
        let slots = self.read_slots(deadline, "SET_MEMBERS")?;
        Ok(slots
            .sets
            .get(slot)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn set_intersect(&self, slots: &[&str], deadline: Deadline) -> StoreResult<Vec<String>> {
        let guard = self.read_slots(deadline, "SET_INTERSECT")?;

        let mut sets = Vec::with_capacity(slots.len());
        for slot in slots {
            match guard.sets.get(*slot) {
                Some(set) => sets.push(set),
                // A missing slot is an empty set, so the intersection is empty.
                None => return Ok(Vec::new()),
            }
        }
        sets.sort_by_key(|set| set.len());

        let Some((smallest, rest)) = sets.split_first() else {
            return Ok(Vec::new());
        };
        Ok(smallest
            .iter()
            .filter(|member| rest.iter().all(|set| set.contains(*member)))
            .cloned()
            .collect())
    }

    fn set_card(&self, slot: &str, deadline: Deadline) -> StoreResult<usize> {
        let slots = self.read_slots(deadline, "SET_CARD")?;
        Ok(slots.sets.get(slot).map_or(0, HashSet::len))
    }

    fn zset_add(
        &self,
        slot: &str,
        member: &str,
        score: f64,
        deadline: Deadline,
    ) -> StoreResult<bool> {
        if !score.is_finite() {
            return Err(StoreError::InvalidScore(score));
        }
        let mut slots = self.write_slots(deadline, "ZSET_ADD")?;
        Ok(slots
            .zsets
            .entry(slot.to_string())
            .or_default()
            .insert(member, score))
    }

    fn zset_range_by_score(
        &self,
        slot: &str,
        min: f64,
        max: f64,
        deadline: Deadline,
    ) -> StoreResult<Vec<String>> {
        let slots = self.read_slots(deadline, "ZSET_RANGE_BY_SCORE")?;
        Ok(slots
            .zsets
            .get(slot)
            .map(|zset| zset.range_by_score(min, max))
            .unwrap_or_default())
    }

    fn zset_card(&self, slot: &str, deadline: Deadline) -> StoreResult<usize> {
        let slots = self.read_slots(deadline, "ZSET_CARD")?;
        Ok(slots.zsets.get(slot).map_or(0, SortedSet::len))
    }
}
