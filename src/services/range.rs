//! Calendar range builder.

use crate::models::{CalendarDate, Roster};

/// Contiguous inclusive sequence of calendar days. Empty iff the source
/// roster is empty.
pub type CalendarRange = Vec<CalendarDate>;

/// Build the contiguous day range spanning the earliest arrival to the
/// latest departure over the whole roster.
///
/// Built once per import from the *unfiltered* roster and reused for
/// filtered views; a location filter narrows which records are evaluated
/// against the range, never the range itself.
pub fn build_range(roster: &Roster) -> CalendarRange {
    let mut bounds: Option<(CalendarDate, CalendarDate)> = None;
    for record in roster {
        for day in [record.arrival, record.departure] {
            bounds = Some(match bounds {
                None => (day, day),
                Some((lo, hi)) => (lo.min(day), hi.max(day)),
            });
        }
    }

    let Some((lo, hi)) = bounds else {
        return Vec::new();
    };

    let mut days = Vec::with_capacity((hi.days_since(lo) + 1) as usize);
    let mut current = lo;
    while current <= hi {
        days.push(current);
        match current.next() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}
