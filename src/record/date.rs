//! Date-of-birth helpers
//!
//! Dates carry no time of day. The range index orders records by a score
//! derived from the date: the number of days since 0001-01-01 (proleptic
//! Gregorian, day 1). The transform is strictly monotonic and every value is
//! exactly representable as an `f64`, so score comparisons never round.

use chrono::{Datelike, NaiveDate};

use super::errors::{ValidationError, ValidationResult};

/// Build a date if the combination exists in the calendar.
///
/// Used by callers that sweep candidate days (1..=31 for every month) and skip
/// whatever does not exist.
pub fn try_construct(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build a date or report why it does not exist.
pub fn construct(year: i32, month: u32, day: u32) -> ValidationResult<NaiveDate> {
    try_construct(year, month, day).ok_or(ValidationError::InvalidDate { year, month, day })
}

/// Parse an ISO `YYYY-MM-DD` literal.
pub fn parse_date(literal: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(literal.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDateLiteral(literal.to_string()))
}

/// Score of a date in the range index.
pub fn score_for(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_construct_rejects_impossible_days() {
        assert!(try_construct(1971, 2, 28).is_some());
        assert!(try_construct(1971, 2, 29).is_none());
        assert!(try_construct(1971, 2, 30).is_none());
        assert!(try_construct(1971, 4, 31).is_none());
        assert!(try_construct(1972, 2, 29).is_some());
        assert!(try_construct(1971, 13, 1).is_none());
    }

    #[test]
    fn test_construct_reports_components() {
        let err = construct(1971, 2, 30).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDate {
                year: 1971,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn test_sweep_of_a_year_keeps_365_days() {
        let mut kept = 0;
        for month in 1..=12 {
            for day in 1..=31 {
                if try_construct(1971, month, day).is_some() {
                    kept += 1;
                }
            }
        }
        assert_eq!(kept, 365);
    }

    #[test]
    fn test_score_is_monotonic() {
        let a = score_for(try_construct(1971, 5, 5).unwrap());
        let b = score_for(try_construct(1971, 5, 6).unwrap());
        let c = score_for(try_construct(1972, 1, 1).unwrap());
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b - a, 1.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1971-05-05").unwrap(), try_construct(1971, 5, 5).unwrap());
        assert!(parse_date("1971-02-30").is_err());
        assert!(parse_date("5-May-1971").is_err());
    }
}
