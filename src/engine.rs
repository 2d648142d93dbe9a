//! Stateful orchestrator over roster snapshots.
//!
//! The engine holds the current working roster, the calendar range derived
//! from it, and the active location filter. Imports replace the working
//! set wholesale: a successful import swaps in the new roster and range as
//! one assignment, a failed or empty import leaves the prior set
//! untouched. Callers never observe a half-updated state.

use crate::error::ImportResult;
use crate::ingest::normalize::normalize;
use crate::ingest::raw::RawRow;
use crate::models::{CalendarDate, Roster, StayRecord};
use crate::services::availability::{daily_totals, presence_row};
use crate::services::filter::{distinct_locations, filter_roster, LocationFilter};
use crate::services::range::{build_range, CalendarRange};
use crate::services::summary::{summarize, Statistics};
use log::{debug, info};
use serde::Serialize;

/// One record of the availability matrix: the record itself, its per-day
/// presence flags aligned with the view's range, and its stay duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityRow {
    pub record: StayRecord,
    pub presence: Vec<bool>,
    pub duration_days: i64,
}

/// Complete availability view for the current roster and filter: the full
/// calendar range, one matrix row per filtered record, the per-day
/// occupancy totals, and the statistics block.
///
/// The range always spans the *unfiltered* roster; the rows, totals, and
/// statistics reflect the filtered one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityView {
    pub range: CalendarRange,
    pub rows: Vec<AvailabilityRow>,
    pub daily_totals: Vec<usize>,
    pub statistics: Statistics,
}

/// Engine holding the working roster and filter criterion.
#[derive(Debug, Clone, Default)]
pub struct RosterEngine {
    roster: Roster,
    range: CalendarRange,
    filter: LocationFilter,
}

impl RosterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a batch of raw rows, replacing the whole working set.
    ///
    /// On success the roster and its range are swapped in together, the
    /// filter resets to [`LocationFilter::All`], and the number of
    /// imported records is returned. On any error the prior working set
    /// is left untouched.
    pub fn import_rows(&mut self, rows: &[RawRow]) -> ImportResult<usize> {
        let roster = normalize(rows)?;
        let count = roster.len();
        self.range = build_range(&roster);
        self.roster = roster;
        self.filter = LocationFilter::All;
        info!("imported {} records spanning {} days", count, self.range.len());
        Ok(count)
    }

    /// Import from a JSON array of row objects, the shape a sheet-to-JSON
    /// parsing collaborator emits.
    pub fn import_json(&mut self, value: &serde_json::Value) -> ImportResult<usize> {
        self.import_rows(&crate::ingest::raw::rows_from_json(value))
    }

    /// Replace the active filter criterion. Derivations recompute on the
    /// next [`RosterEngine::view`] call; the range is unaffected.
    pub fn set_filter(&mut self, criterion: LocationFilter) {
        debug!("filter set to {:?}", criterion);
        self.filter = criterion;
    }

    pub fn filter(&self) -> &LocationFilter {
        &self.filter
    }

    /// The unfiltered working roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The calendar range of the unfiltered roster.
    pub fn range(&self) -> &[CalendarDate] {
        &self.range
    }

    /// Sorted unique locations of the unfiltered roster, for populating
    /// selectable filter criteria.
    pub fn locations(&self) -> Vec<String> {
        distinct_locations(&self.roster)
    }

    /// Build the availability view for the current roster and filter.
    pub fn view(&self) -> AvailabilityView {
        let filtered = filter_roster(&self.roster, &self.filter);
        let rows = filtered
            .iter()
            .map(|record| AvailabilityRow {
                presence: presence_row(record, &self.range),
                duration_days: record.stay_duration(),
                record: record.clone(),
            })
            .collect();
        AvailabilityView {
            daily_totals: daily_totals(&filtered, &self.range),
            statistics: summarize(&filtered, &self.range),
            range: self.range.clone(),
            rows,
        }
    }
}
