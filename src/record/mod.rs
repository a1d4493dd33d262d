//! Record subsystem
//!
//! The single entity stored by rosterdb: a named person with two categorical
//! attributes (gender, country) and one range attribute (date of birth).
//!
//! # Invariants
//!
//! - Date of birth is always a valid calendar date
//! - Records are immutable once built

mod date;
mod errors;
mod person;

pub use date::{construct, parse_date, score_for, try_construct};
pub use errors::{ValidationError, ValidationResult};
pub use person::{Country, Gender, Record};
