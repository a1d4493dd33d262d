//! Index Manager
//!
//! Fans each record out into its index slots and answers the three query
//! shapes from them.
//!
//! # API
//!
//! - `store(record)` - Write the record into its gender, country and range slots
//! - `query_by_date_range(from, to)` - Inclusive range, ascending by date of birth
//! - `query_by_gender(g)` / `query_by_country(c)` - One set slot, unordered
//! - `query_selection(g, c)` - Intersection of a gender and a country slot
//!
//! # Consistency
//!
//! The three writes of one `store` are separate round trips. A concurrent
//! reader may see a record in its gender slot before it reaches the country or
//! range slot, and a failed write leaves the earlier ones in place. Records are
//! never updated, so there is nothing to lock. An intersection only returns
//! members present in both sets, so a selection never shows a record that the
//! single-slot queries could not also return.
//!
//! Records that encode identically (same name, gender, country and date)
//! collapse into one member in every slot.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::codec;
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::record::{score_for, Country, Gender, Record};
use crate::store::{Deadline, RecordStore, StoreResult};

use super::config::{IndexConfig, MalformedPolicy};
use super::errors::{QueryError, QueryResult};
use super::slots::{slot_for, Attribute, SlotId, SlotKind, RANGE_SLOT};

/// Maintains the secondary indexes over an injected [`RecordStore`].
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct IndexManager<S: RecordStore> {
    store: Arc<S>,
    config: IndexConfig,
    metrics: MetricsRegistry,
}

impl<S: RecordStore> IndexManager<S> {
    /// Create a manager with the default configuration
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, IndexConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: IndexConfig) -> Self {
        Self {
            store,
            config,
            metrics: MetricsRegistry::new(),
        }
    }

    /// The backing store
    pub fn backend(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Fresh deadline for one round trip
    fn deadline(&self) -> Deadline {
        Deadline::from_budget(self.config.round_trip_timeout)
    }

    /// Store a record in every slot that indexes it.
    ///
    /// Writes, in order: gender set, country set, range slot. The first
    /// failure is returned as-is; slots written before it keep the record.
    pub fn store(&self, record: &Record) -> StoreResult<()> {
        let member = codec::encode(record);
        let gender_slot = slot_for(record.gender());
        let country_slot = slot_for(record.country());
        let score = score_for(record.date_of_birth());

        let mut completed = 0usize;
        let outcome = self.fan_out(&member, gender_slot, country_slot, score, &mut completed);

        match outcome {
            Ok(()) => {
                self.metrics.increment_records_stored();
                Logger::emit(
                    Event::RecordStored,
                    &[
                        ("country", country_slot.key()),
                        ("gender", gender_slot.key()),
                    ],
                );
                Ok(())
            }
            Err(e) => {
                self.metrics.increment_store_failures();
                let completed = completed.to_string();
                let reason = e.to_string();
                Logger::emit(
                    Event::StoreFailed,
                    &[
                        ("code", e.code()),
                        ("completed_slots", completed.as_str()),
                        ("reason", reason.as_str()),
                    ],
                );
                Err(e)
            }
        }
    }

    /// The three slot writes of one record. `completed` counts the ones that
    /// landed before any failure.
    fn fan_out(
        &self,
        member: &str,
        gender_slot: SlotId,
        country_slot: SlotId,
        score: f64,
        completed: &mut usize,
    ) -> StoreResult<()> {
        self.store.set_add(gender_slot.key(), member, self.deadline())?;
        self.metrics.increment_slot_writes();
        *completed += 1;

        self.store.set_add(country_slot.key(), member, self.deadline())?;
        self.metrics.increment_slot_writes();
        *completed += 1;

        self.store
            .zset_add(RANGE_SLOT.key(), member, score, self.deadline())?;
        self.metrics.increment_slot_writes();
        *completed += 1;
        Ok(())
    }

    /// Records born between `from` and `to` inclusive, ascending by date.
    ///
    /// `from > to` is an empty result, not an error.
    pub fn query_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> QueryResult<Vec<Record>> {
        if from > to {
            self.metrics.increment_queries_executed();
            return Ok(Vec::new());
        }
        let (min, max) = (score_for(from), score_for(to));
        self.run_query("range", &[RANGE_SLOT], |deadline| {
            self.store
                .zset_range_by_score(RANGE_SLOT.key(), min, max, deadline)
        })
    }

    /// Every record in the slot for one categorical value, unordered.
    pub fn query_by_category(&self, attribute: impl Into<Attribute>) -> QueryResult<Vec<Record>> {
        let slot = slot_for(attribute);
        self.run_query("category", &[slot], |deadline| {
            self.store.set_members(slot.key(), deadline)
        })
    }

    pub fn query_by_gender(&self, gender: Gender) -> QueryResult<Vec<Record>> {
        self.query_by_category(gender)
    }

    pub fn query_by_country(&self, country: Country) -> QueryResult<Vec<Record>> {
        self.query_by_category(country)
    }

    /// Records with both `gender` and `country`, unordered.
    ///
    /// One intersect round trip over the two set slots.
    pub fn query_selection(&self, gender: Gender, country: Country) -> QueryResult<Vec<Record>> {
        let gender_slot = slot_for(gender);
        let country_slot = slot_for(country);
        self.run_query("selection", &[gender_slot, country_slot], |deadline| {
            self.store
                .set_intersect(&[gender_slot.key(), country_slot.key()], deadline)
        })
    }

    /// Member count of every slot, in `SlotId::ALL` order.
    pub fn slot_counts(&self) -> StoreResult<Vec<(SlotId, usize)>> {
        let mut counts = Vec::with_capacity(SlotId::ALL.len());
        for slot in SlotId::ALL {
            let count = match slot.kind() {
                SlotKind::Sorted => self.store.zset_card(slot.key(), self.deadline())?,
                SlotKind::Set => self.store.set_card(slot.key(), self.deadline())?,
            };
            counts.push((slot, count));
        }
        Ok(counts)
    }

    /// Run one store read and decode its members. `slots` lists every slot
    /// the read touched.
    fn run_query<F>(
        &self,
        shape: &'static str,
        slots: &[SlotId],
        fetch: F,
    ) -> QueryResult<Vec<Record>>
    where
        F: FnOnce(Deadline) -> StoreResult<Vec<String>>,
    {
        let label = slot_label(slots);
        let result = fetch(self.deadline())
            .map_err(QueryError::from)
            .and_then(|members| self.decode_members(&label, members));

        match &result {
            Ok(records) => {
                self.metrics.increment_queries_executed();
                self.metrics.add_members_returned(records.len() as u64);
                let count = records.len().to_string();
                Logger::emit(
                    Event::QueryExecuted,
                    &[
                        ("records", count.as_str()),
                        ("shape", shape),
                        ("slot", label.as_str()),
                    ],
                );
            }
            Err(e) => {
                self.metrics.increment_queries_failed();
                let reason = e.to_string();
                Logger::emit(
                    Event::QueryFailed,
                    &[("code", e.code()), ("reason", reason.as_str()), ("shape", shape)],
                );
            }
        }
        result
    }

    /// Decode members in the order the store returned them.
    fn decode_members(&self, label: &str, members: Vec<String>) -> QueryResult<Vec<Record>> {
        let mut records = Vec::with_capacity(members.len());
        for member in members {
            match codec::decode(&member) {
                Ok(record) => records.push(record),
                Err(e) => match self.config.malformed_policy {
                    MalformedPolicy::SkipAndLog => {
                        self.metrics.increment_members_skipped();
                        Logger::emit(
                            Event::MemberSkipped,
                            &[
                                ("member", member.as_str()),
                                ("reason", e.reason()),
                                ("slot", label),
                            ],
                        );
                    }
                    MalformedPolicy::Fail => {
                        return Err(QueryError::Malformed {
                            slot: label.to_string(),
                            source: e,
                        });
                    }
                },
            }
        }
        Ok(records)
    }
}

/// Slot keys joined by `&`, as used in logs and `QueryError::Malformed`.
fn slot_label(slots: &[SlotId]) -> String {
    slots
        .iter()
        .map(SlotId::key)
        .collect::<Vec<_>>()
        .join("&")
}
