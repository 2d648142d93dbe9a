//! Availability evaluation: per-record presence and per-day occupancy.

use crate::models::{CalendarDate, Roster, StayRecord};

/// Count of records in `roster` present on `day`.
pub fn occupancy(roster: &Roster, day: CalendarDate) -> usize {
    roster.iter().filter(|r| r.is_available(day)).count()
}

/// Presence flags for one record across the range, one per day.
pub fn presence_row(record: &StayRecord, range: &[CalendarDate]) -> Vec<bool> {
    range.iter().map(|day| record.is_available(*day)).collect()
}

/// Per-day occupancy totals across the range.
pub fn daily_totals(roster: &Roster, range: &[CalendarDate]) -> Vec<usize> {
    range.iter().map(|day| occupancy(roster, *day)).collect()
}
