//! Secondary index subsystem
//!
//! The store only knows sets and sorted sets. Indexes are built from them:
//!
//! - one set per gender and one per country (categorical lookup)
//! - one sorted set scored by date of birth (range lookup)
//! - set intersection of a gender and a country slot (selection)
//!
//! Every slot holds the full encoded record.
//!
//! # Invariants
//!
//! - A stored record is in exactly one gender slot, one country slot and the
//!   range slot, unless its fan-out write failed part way
//! - Slot names come only from `slot_for` and `RANGE_SLOT`
//! - Range results ascend by date of birth

mod config;
mod errors;
mod manager;
mod slots;

pub use config::{IndexConfig, MalformedPolicy};
pub use errors::{QueryError, QueryResult};
pub use manager::IndexManager;
pub use slots::{slot_for, Attribute, SlotId, SlotKind, RANGE_SLOT};
