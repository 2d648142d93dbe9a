//! Location filtering.

use crate::models::{Roster, StayRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter criterion over record locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationFilter {
    /// Identity filter: every record passes.
    #[default]
    All,
    /// Exact, case-sensitive location match.
    Only(String),
}

impl LocationFilter {
    pub fn matches(&self, record: &StayRecord) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(location) => record.location == *location,
        }
    }
}

/// Select the subsequence of records passing the filter, input order
/// preserved. `All` returns a roster equal by value to the input.
pub fn filter_roster(roster: &Roster, criterion: &LocationFilter) -> Roster {
    match criterion {
        LocationFilter::All => roster.clone(),
        LocationFilter::Only(_) => Roster::new(
            roster
                .iter()
                .filter(|r| criterion.matches(r))
                .cloned()
                .collect(),
        ),
    }
}

/// Sorted unique locations across the unfiltered roster; used to populate
/// the selectable filter criteria.
pub fn distinct_locations(roster: &Roster) -> Vec<String> {
    roster
        .iter()
        .map(|r| r.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
