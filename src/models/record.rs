use crate::models::CalendarDate;
use serde::{Deserialize, Serialize};

/// A validated, normalized person-stay entry.
///
/// Invariants, enforced by [`StayRecord::try_new`]: all string fields are
/// non-empty after trimming, and `arrival <= departure`. Records are
/// immutable after creation; identity is positional within a [`Roster`]
/// and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRecord {
    pub given_name: String,
    pub family_name: String,
    pub location: String,
    pub arrival: CalendarDate,
    pub departure: CalendarDate,
}

impl StayRecord {
    /// Validating constructor. Trims the string fields and returns `None`
    /// if any field is empty after trimming or the interval is inverted.
    pub fn try_new(
        given_name: &str,
        family_name: &str,
        location: &str,
        arrival: CalendarDate,
        departure: CalendarDate,
    ) -> Option<Self> {
        let given_name = given_name.trim();
        let family_name = family_name.trim();
        let location = location.trim();
        if given_name.is_empty() || family_name.is_empty() || location.is_empty() {
            return None;
        }
        if arrival > departure {
            return None;
        }
        Some(Self {
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            location: location.to_string(),
            arrival,
            departure,
        })
    }

    /// Whether this person is present on `day` (inclusive of both the
    /// arrival and departure days).
    pub fn is_available(&self, day: CalendarDate) -> bool {
        day >= self.arrival && day <= self.departure
    }

    /// Stay length in whole days, inclusive of both endpoints.
    /// A same-day stay has duration 1.
    pub fn stay_duration(&self) -> i64 {
        self.departure.days_since(self.arrival) + 1
    }
}

/// Ordered collection of stay records.
///
/// Insertion order is preserved and entries are not deduplicated. Rebuilt
/// wholesale on every import; never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster(Vec<StayRecord>);

impl Roster {
    pub fn new(records: Vec<StayRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[StayRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StayRecord> {
        self.0.iter()
    }
}

impl From<Vec<StayRecord>> for Roster {
    fn from(records: Vec<StayRecord>) -> Self {
        Roster::new(records)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StayRecord;
    type IntoIter = std::slice::Iter<'a, StayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
