//! Demonstration data
//!
//! One record per day of a year. Candidate days 1..=31 are tried for every
//! month and those that do not exist are skipped, not treated as errors.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::index::IndexManager;
use crate::observability::{Event, Logger};
use crate::record::{try_construct, Country, Gender, Record};
use crate::store::{RecordStore, StoreResult};

/// Outcome of seeding one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    /// Records written
    pub stored: usize,
    /// Candidate (month, day) pairs that are not calendar dates
    pub skipped: usize,
}

/// A random name: `p` followed by the 32 hex digits of a v4 UUID.
pub fn any_name() -> String {
    format!("p{}", Uuid::new_v4().simple())
}

/// Even days are male, odd days female.
pub fn gender_for_day(day: u32) -> Gender {
    if day % 2 == 0 {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Round-robin by day: 1 → USA, 2 → GB, 0 → India (mod 3).
pub fn country_for_day(day: u32) -> Country {
    match day % 3 {
        1 => Country::Usa,
        2 => Country::Gb,
        _ => Country::India,
    }
}

/// Every valid date of `year`, in calendar order.
pub fn dates_of_year(year: i32) -> (Vec<NaiveDate>, usize) {
    let mut dates = Vec::with_capacity(366);
    let mut skipped = 0;
    for month in 1..=12 {
        for day in 1..=31 {
            match try_construct(year, month, day) {
                Some(date) => dates.push(date),
                None => skipped += 1,
            }
        }
    }
    (dates, skipped)
}

/// The record generated for `date`
pub fn record_for(date: NaiveDate) -> Record {
    let day = date.day();
    Record::new(any_name(), gender_for_day(day), country_for_day(day), date)
}

/// Store one generated record for each day of `year`.
///
/// Stops at the first store failure; records already stored stay.
pub fn seed_year<S: RecordStore>(index: &IndexManager<S>, year: i32) -> StoreResult<SeedReport> {
    let year_str = year.to_string();
    Logger::emit(Event::SeedBegin, &[("year", year_str.as_str())]);

    let (dates, skipped) = dates_of_year(year);
    let mut report = SeedReport {
        stored: 0,
        skipped,
    };
    for date in dates {
        index.store(&record_for(date))?;
        report.stored += 1;
    }

    let stored = report.stored.to_string();
    let skipped = report.skipped.to_string();
    Logger::emit(
        Event::SeedComplete,
        &[
            ("skipped", skipped.as_str()),
            ("stored", stored.as_str()),
            ("year", year_str.as_str()),
        ],
    );
    Ok(report)
}
