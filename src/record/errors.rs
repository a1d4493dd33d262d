//! Record construction errors
//!
//! Error codes:
//! - ROSTER_INVALID_DATE
//! - ROSTER_UNKNOWN_GENDER
//! - ROSTER_UNKNOWN_COUNTRY

use thiserror::Error;

/// Result type for record construction
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Malformed construction input.
///
/// Raised before a record ever reaches the index, so nothing is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid date literal: {0}")]
    InvalidDateLiteral(String),

    #[error("Unknown gender label: {0}")]
    UnknownGender(String),

    #[error("Unknown country label: {0}")]
    UnknownCountry(String),
}

impl ValidationError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate { .. } | ValidationError::InvalidDateLiteral(_) => {
                "ROSTER_INVALID_DATE"
            }
            ValidationError::UnknownGender(_) => "ROSTER_UNKNOWN_GENDER",
            ValidationError::UnknownCountry(_) => "ROSTER_UNKNOWN_COUNTRY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = ValidationError::InvalidDate {
            year: 1971,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "Invalid calendar date: 1971-02-30");
        assert_eq!(err.code(), "ROSTER_INVALID_DATE");
    }

    #[test]
    fn test_label_codes() {
        assert_eq!(
            ValidationError::UnknownGender("x".into()).code(),
            "ROSTER_UNKNOWN_GENDER"
        );
        assert_eq!(
            ValidationError::UnknownCountry("FR".into()).code(),
            "ROSTER_UNKNOWN_COUNTRY"
        );
    }
}
