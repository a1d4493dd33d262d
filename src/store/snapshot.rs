//! Snapshot files for the in-memory store
//!
//! ```text
//! ROSTERDB-SNAPSHOT v1 crc32=<8 hex digits>
//! <JSON body>
//! ```
//!
//! The CRC32 (IEEE) covers the body bytes. A mismatch refuses the load.
//! Writes go to a sibling temporary file which is then renamed over the
//! target.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::memory::Slots;
use super::sorted::SortedSet;

const HEADER_PREFIX: &str = "ROSTERDB-SNAPSHOT v1 crc32=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoredMember {
    member: String,
    score: f64,
}

/// Serializable image of every slot, in deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct SlotSnapshot {
    sets: BTreeMap<String, BTreeSet<String>>,
    zsets: BTreeMap<String, Vec<ScoredMember>>,
}

impl SlotSnapshot {
    pub(crate) fn from_slots(slots: &Slots) -> Self {
        let sets = slots
            .sets
            .iter()
            .map(|(slot, members)| (slot.clone(), members.iter().cloned().collect()))
            .collect();
        let zsets = slots
            .zsets
            .iter()
            .map(|(slot, zset)| {
                let members = zset
                    .iter()
                    .map(|(member, score)| ScoredMember {
                        member: member.to_string(),
                        score,
                    })
                    .collect();
                (slot.clone(), members)
            })
            .collect();
        Self { sets, zsets }
    }

    pub(crate) fn into_slots(self) -> StoreResult<Slots> {
        let mut slots = Slots::default();
        for (slot, members) in self.sets {
            slots.sets.insert(slot, members.into_iter().collect());
        }
        for (slot, members) in self.zsets {
            let mut zset = SortedSet::new();
            for ScoredMember { member, score } in members {
                if !score.is_finite() {
                    return Err(StoreError::SnapshotCorrupted(format!(
                        "non-finite score in slot '{}'",
                        slot
                    )));
                }
                zset.insert(&member, score);
            }
            slots.zsets.insert(slot, zset);
        }
        Ok(slots)
    }
}

fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Read a snapshot. `Ok(None)` when the file does not exist.
pub(crate) fn read(path: &Path) -> StoreResult<Option<SlotSnapshot>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let (header, body) = content
        .split_once('\n')
        .ok_or_else(|| StoreError::SnapshotCorrupted("missing header line".to_string()))?;

    let expected = header
        .strip_prefix(HEADER_PREFIX)
        .and_then(|hex| u32::from_str_radix(hex.trim(), 16).ok())
        .ok_or_else(|| StoreError::SnapshotCorrupted(format!("bad header: {}", header)))?;

    let actual = compute_checksum(body.as_bytes());
    if actual != expected {
        return Err(StoreError::SnapshotCorrupted(format!(
            "checksum mismatch (expected {:08x}, found {:08x})",
            expected, actual
        )));
    }

    let snap = serde_json::from_str(body)
        .map_err(|e| StoreError::SnapshotCorrupted(format!("invalid body: {}", e)))?;
    Ok(Some(snap))
}

/// Write a snapshot through a temporary file and rename.
pub(crate) fn write(path: &Path, snap: &SlotSnapshot) -> StoreResult<()> {
    let body = serde_json::to_string(snap)
        .map_err(|e| StoreError::Unavailable(format!("snapshot encode failed: {}", e)))?;
    let checksum = compute_checksum(body.as_bytes());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&tmp_path)?;
        writeln!(file, "{}{:08x}", HEADER_PREFIX, checksum)?;
        file.write_all(body.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}
