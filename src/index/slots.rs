//! Slot naming
//!
//! Slot identifiers form a closed set known at compile time. Nothing derived
//! from user input ever becomes a store key.

use std::fmt;

use crate::record::{Country, Gender};

/// Shape of the structure behind a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Unordered set of encoded records
    Set,
    /// Sorted collection scored by date of birth
    Sorted,
}

/// One index slot in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    Gender(Gender),
    Country(Country),
    DateOfBirth,
}

/// The single range slot
pub const RANGE_SLOT: SlotId = SlotId::DateOfBirth;

impl SlotId {
    /// Every slot: genders, then countries, then the range slot
    pub const ALL: [SlotId; 6] = [
        SlotId::Gender(Gender::Male),
        SlotId::Gender(Gender::Female),
        SlotId::Country(Country::India),
        SlotId::Country(Country::Usa),
        SlotId::Country(Country::Gb),
        SlotId::DateOfBirth,
    ];

    /// Store key
    pub fn key(&self) -> &'static str {
        match self {
            SlotId::Gender(Gender::Male) => "roster:gender:MALE",
            SlotId::Gender(Gender::Female) => "roster:gender:FEMALE",
            SlotId::Country(Country::India) => "roster:country:INDIA",
            SlotId::Country(Country::Usa) => "roster:country:USA",
            SlotId::Country(Country::Gb) => "roster:country:GB",
            SlotId::DateOfBirth => "roster:dob",
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            SlotId::Gender(_) | SlotId::Country(_) => SlotKind::Set,
            SlotId::DateOfBirth => SlotKind::Sorted,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A categorical attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Gender(Gender),
    Country(Country),
}

impl From<Gender> for Attribute {
    fn from(g: Gender) -> Self {
        Attribute::Gender(g)
    }
}

impl From<Country> for Attribute {
    fn from(c: Country) -> Self {
        Attribute::Country(c)
    }
}

/// The set slot holding every record with this attribute value.
///
/// Shared by the write path and all categorical queries.
pub fn slot_for(attribute: impl Into<Attribute>) -> SlotId {
    match attribute.into() {
        Attribute::Gender(g) => SlotId::Gender(g),
        Attribute::Country(c) => SlotId::Country(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = SlotId::ALL.iter().map(SlotId::key).collect();
        assert_eq!(keys.len(), SlotId::ALL.len());
    }

    #[test]
    fn test_slot_for_covers_every_value() {
        for g in Gender::ALL {
            assert_eq!(slot_for(g), SlotId::Gender(g));
            assert_eq!(slot_for(g).kind(), SlotKind::Set);
        }
        for c in Country::ALL {
            assert_eq!(slot_for(c), SlotId::Country(c));
        }
        assert_eq!(RANGE_SLOT.kind(), SlotKind::Sorted);
    }

    #[test]
    fn test_keys_use_symbolic_codes() {
        assert_eq!(slot_for(Country::Gb).key(), "roster:country:GB");
        assert_eq!(slot_for(Gender::Female).to_string(), "roster:gender:FEMALE");
    }
}
