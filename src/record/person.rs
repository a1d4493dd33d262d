//! Person record and its categorical attributes

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date;
use super::errors::{ValidationError, ValidationResult};

/// Gender attribute.
///
/// Serialized as the symbolic code (`MALE`, `FEMALE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All genders, in declaration order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Stable symbolic code
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    /// Human-facing label
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownGender(s.to_string()))
    }
}

/// Country attribute.
///
/// Serialized as the symbolic code (`INDIA`, `USA`, `GB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    India,
    Usa,
    Gb,
}

impl Country {
    /// All countries, in declaration order
    pub const ALL: [Country; 3] = [Country::India, Country::Usa, Country::Gb];

    /// Stable symbolic code
    pub fn code(&self) -> &'static str {
        match self {
            Country::India => "INDIA",
            Country::Usa => "USA",
            Country::Gb => "GB",
        }
    }

    /// Human-facing label
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Usa => "USA",
            Country::Gb => "Great Britain",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    /// Unknown labels are rejected; there is no fallback country.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCountry(s.to_string()))
    }
}

/// An immutable person record.
///
/// Fields are set once at construction and only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    gender: Gender,
    country: Country,
    date_of_birth: NaiveDate,
}

impl Record {
    /// Create a record from an already valid date
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        country: Country,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            country,
            date_of_birth,
        }
    }

    /// Create a record from raw date components.
    ///
    /// Fails with `InvalidDate` when the day does not exist in that month.
    pub fn from_ymd(
        name: impl Into<String>,
        gender: Gender,
        country: Country,
        year: i32,
        month: u32,
        day: u32,
    ) -> ValidationResult<Self> {
        let dob = date::construct(year, month, day)?;
        Ok(Self::new(name, gender, country, dob))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Gender: {}, Country: {}, DoB: {}",
            self.name,
            self.gender,
            self.country,
            self.date_of_birth.format("%Y-%m-%d")
        )
    }
}
