//! Canonical JSON encoding of records
//!
//! Members are compact JSON objects with keys in alphabetical order:
//!
//! ```text
//! {"country":"USA","dob":"1971-05-05","gender":"FEMALE","name":"p1f0..."}
//! ```
//!
//! Set slots de-duplicate by exact member bytes, so equal records must always
//! produce the same string. Key order comes from `serde_json::Map`, which is
//! sorted as long as the `preserve_order` feature stays off.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::record::{Country, Gender, Record};

use super::errors::{CodecResult, MalformedRecordError};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireRecord {
    name: String,
    gender: Gender,
    country: Country,
    dob: String,
}

/// Encode a record to its canonical member string.
pub fn encode(record: &Record) -> String {
    json!({
        "name": record.name(),
        "gender": record.gender().code(),
        "country": record.country().code(),
        "dob": record.date_of_birth().format(DATE_FORMAT).to_string(),
    })
    .to_string()
}

/// Decode a member string produced by [`encode`].
pub fn decode(text: &str) -> CodecResult<Record> {
    let wire: WireRecord = serde_json::from_str(text)?;
    let dob = NaiveDate::parse_from_str(&wire.dob, DATE_FORMAT).map_err(|e| {
        MalformedRecordError::new(format!("invalid dob '{}': {}", wire.dob, e))
    })?;
    Ok(Record::new(wire.name, wire.gender, wire.country, dob))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Record {
        Record::from_ymd("alice", Gender::Female, Country::Usa, 1971, 5, 5).unwrap()
    }

    #[test]
    fn test_encode_golden() {
        assert_eq!(
            encode(&alice()),
            r#"{"country":"USA","dob":"1971-05-05","gender":"FEMALE","name":"alice"}"#
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode(&alice());
        let b = encode(&alice().clone());
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_round_trip_all_attribute_values() {
        for gender in Gender::ALL {
            for country in Country::ALL {
                let record =
                    Record::from_ymd("p\"quoted\"\n", gender, country, 1972, 2, 29).unwrap();
                assert_eq!(decode(&encode(&record)).unwrap(), record);
            }
        }
    }

    #[test]
    fn test_decode_accepts_any_key_order() {
        let text = r#"{"name":"alice","gender":"FEMALE","dob":"1971-05-05","country":"USA"}"#;
        assert_eq!(decode(text).unwrap(), alice());
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode(r#"{"name":"x","gender":"MALE","dob":"1971-05-05"}"#).unwrap_err();
        assert!(err.reason().contains("country"));
    }

    #[test]
    fn test_decode_invalid_date() {
        let err =
            decode(r#"{"country":"GB","dob":"1971-02-30","gender":"MALE","name":"x"}"#)
                .unwrap_err();
        assert!(err.reason().contains("1971-02-30"));
        assert_eq!(err.code(), "ROSTER_MALFORMED_RECORD");
    }

    #[test]
    fn test_decode_rejects_display_labels() {
        let text = r#"{"country":"Great Britain","dob":"1971-05-05","gender":"Male","name":"x"}"#;
        assert!(decode(text).is_err());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode("not json").is_err());
        assert!(decode("").is_err());
    }
}
