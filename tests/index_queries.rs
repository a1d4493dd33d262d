//! Index Query Tests
//!
//! Tests for the three query shapes over a populated store:
//! - Range queries are inclusive and ascend by date of birth
//! - Categorical queries return exactly the records with that value
//! - Selection equals the intersection of its two categorical queries
//! - Storing the same record twice changes nothing

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use rosterdb::index::{IndexManager, SlotId};
use rosterdb::record::{Country, Gender, Record};
use rosterdb::seed;
use rosterdb::store::MemoryStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn manager() -> IndexManager<MemoryStore> {
    IndexManager::new(Arc::new(MemoryStore::new()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn person(name: &str, gender: Gender, country: Country, dob: NaiveDate) -> Record {
    Record::new(name, gender, country, dob)
}

fn as_set(records: Vec<Record>) -> HashSet<Record> {
    records.into_iter().collect()
}

fn count_of(index: &IndexManager<MemoryStore>, slot: SlotId) -> usize {
    index
        .slot_counts()
        .unwrap()
        .into_iter()
        .find(|(s, _)| *s == slot)
        .map(|(_, n)| n)
        .unwrap()
}

/// The three-record scenario: A (F, USA, 05-05), B (M, USA, 05-06),
/// C (F, INDIA, 05-07).
fn scenario() -> (IndexManager<MemoryStore>, [Record; 3]) {
    let index = manager();
    let records = [
        person("A", Gender::Female, Country::Usa, date(1971, 5, 5)),
        person("B", Gender::Male, Country::Usa, date(1971, 5, 6)),
        person("C", Gender::Female, Country::India, date(1971, 5, 7)),
    ];
    for record in &records {
        index.store(record).unwrap();
    }
    (index, records)
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Range over all three days returns A, B, C in date order.
#[test]
fn test_scenario_range_in_date_order() {
    let (index, records) = scenario();

    let got = index
        .query_by_date_range(date(1971, 5, 5), date(1971, 5, 7))
        .unwrap();
    assert_eq!(got, records.to_vec());
}

/// Range bounds are inclusive on both ends.
#[test]
fn test_scenario_range_single_day() {
    let (index, records) = scenario();

    let got = index
        .query_by_date_range(date(1971, 5, 6), date(1971, 5, 6))
        .unwrap();
    assert_eq!(got, vec![records[1].clone()]);
}

/// Female + USA selects only A.
#[test]
fn test_scenario_selection() {
    let (index, records) = scenario();

    let got = index.query_selection(Gender::Female, Country::Usa).unwrap();
    assert_eq!(got, vec![records[0].clone()]);

    let none = index.query_selection(Gender::Male, Country::India).unwrap();
    assert!(none.is_empty());
}

/// Categorical queries return exactly the matching records.
#[test]
fn test_scenario_categorical() {
    let (index, records) = scenario();

    let female = as_set(index.query_by_gender(Gender::Female).unwrap());
    assert_eq!(female, as_set(vec![records[0].clone(), records[2].clone()]));

    let usa = as_set(index.query_by_country(Country::Usa).unwrap());
    assert_eq!(usa, as_set(vec![records[0].clone(), records[1].clone()]));

    assert!(index.query_by_country(Country::Gb).unwrap().is_empty());
}

/// Queries on an empty store return empty results, not errors.
#[test]
fn test_empty_store_queries() {
    let index = manager();

    assert!(index
        .query_by_date_range(date(1900, 1, 1), date(2100, 1, 1))
        .unwrap()
        .is_empty());
    assert!(index.query_by_gender(Gender::Male).unwrap().is_empty());
    assert!(index
        .query_selection(Gender::Female, Country::Gb)
        .unwrap()
        .is_empty());
}

// =============================================================================
// Seeded Year Tests
// =============================================================================

/// Every stored date falls inside a range that covers it, and no other.
#[test]
fn test_seeded_range_is_exact_and_ordered() {
    let index = manager();
    let report = seed::seed_year(&index, 1971).unwrap();
    assert_eq!(report.stored, 365);

    let got = index
        .query_by_date_range(date(1971, 2, 27), date(1971, 3, 2))
        .unwrap();
    let dobs: Vec<NaiveDate> = got.iter().map(Record::date_of_birth).collect();
    assert_eq!(
        dobs,
        vec![
            date(1971, 2, 27),
            date(1971, 2, 28),
            date(1971, 3, 1),
            date(1971, 3, 2),
        ]
    );

    let whole = index
        .query_by_date_range(date(1971, 1, 1), date(1971, 12, 31))
        .unwrap();
    assert_eq!(whole.len(), 365);
    assert!(whole
        .windows(2)
        .all(|w| w[0].date_of_birth() <= w[1].date_of_birth()));
}

/// Selection equals the intersection of the gender and country results for
/// every combination.
#[test]
fn test_selection_equals_intersection() {
    let index = manager();
    seed::seed_year(&index, 1972).unwrap();

    for gender in Gender::ALL {
        let by_gender = as_set(index.query_by_gender(gender).unwrap());
        for country in Country::ALL {
            let by_country = as_set(index.query_by_country(country).unwrap());
            let expected: HashSet<Record> =
                by_gender.intersection(&by_country).cloned().collect();

            let got = as_set(index.query_selection(gender, country).unwrap());
            assert_eq!(got, expected, "selection {} / {}", gender, country);
        }
    }
}

/// Gender slots partition the stored records; so do country slots.
#[test]
fn test_categorical_slots_partition_records() {
    let index = manager();
    let report = seed::seed_year(&index, 1971).unwrap();

    let by_gender: usize = Gender::ALL
        .iter()
        .map(|g| count_of(&index, SlotId::Gender(*g)))
        .sum();
    let by_country: usize = Country::ALL
        .iter()
        .map(|c| count_of(&index, SlotId::Country(*c)))
        .sum();

    assert_eq!(by_gender, report.stored);
    assert_eq!(by_country, report.stored);
    assert_eq!(count_of(&index, SlotId::DateOfBirth), report.stored);
}

/// Every attribute combination is returned intact by every query shape.
#[test]
fn test_all_attribute_combinations_survive_indexing() {
    let index = manager();
    let mut stored = Vec::new();
    let mut day = 1;
    for gender in Gender::ALL {
        for country in Country::ALL {
            let record = person(
                &format!("{}-{}", gender.code(), country.code()),
                gender,
                country,
                date(1990, 1, day),
            );
            index.store(&record).unwrap();
            stored.push(record);
            day += 1;
        }
    }

    for record in &stored {
        let dob = record.date_of_birth();
        assert_eq!(index.query_by_date_range(dob, dob).unwrap(), vec![record.clone()]);
        assert_eq!(
            index
                .query_selection(record.gender(), record.country())
                .unwrap(),
            vec![record.clone()]
        );
    }
}

// =============================================================================
// Idempotence Tests
// =============================================================================

/// Storing the same record twice leaves every slot count unchanged.
#[test]
fn test_store_is_idempotent() {
    let index = manager();
    let record = person("A", Gender::Male, Country::Gb, date(1980, 6, 1));

    index.store(&record).unwrap();
    let before = index.slot_counts().unwrap();
    index.store(&record).unwrap();
    let after = index.slot_counts().unwrap();

    assert_eq!(before, after);
    assert_eq!(index.query_by_country(Country::Gb).unwrap(), vec![record]);
}

/// Distinct records that share a date all appear in the range result.
#[test]
fn test_shared_date_keeps_distinct_records() {
    let index = manager();
    let dob = date(1980, 6, 1);
    index
        .store(&person("A", Gender::Male, Country::Gb, dob))
        .unwrap();
    index
        .store(&person("B", Gender::Male, Country::Gb, dob))
        .unwrap();

    let got = index.query_by_date_range(dob, dob).unwrap();
    let names: Vec<&str> = got.iter().map(Record::name).collect();
    assert_eq!(names, vec!["A", "B"]);
}
