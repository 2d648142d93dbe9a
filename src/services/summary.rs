//! Summary statistics over a (possibly filtered) roster.

use crate::models::{CalendarDate, Roster};
use crate::services::availability::occupancy;
use serde::{Deserialize, Serialize};

/// Derived statistics block. Recomputed wholesale whenever the filtered
/// roster or the range changes; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of records in the filtered roster.
    pub population_size: usize,
    /// Mean stay duration in days, rounded to one decimal place
    /// (half away from zero). 0.0 for an empty roster.
    pub average_duration_days: f64,
    /// Maximum per-day occupancy across the range. 0 for an empty range.
    pub peak_daily_occupancy: usize,
}

impl Statistics {
    pub fn empty() -> Self {
        Self {
            population_size: 0,
            average_duration_days: 0.0,
            peak_daily_occupancy: 0,
        }
    }
}

/// Compute statistics for a filtered roster evaluated against the
/// unfiltered calendar range.
pub fn summarize(filtered: &Roster, range: &[CalendarDate]) -> Statistics {
    if filtered.is_empty() {
        return Statistics::empty();
    }

    let total_days: i64 = filtered.iter().map(|r| r.stay_duration()).sum();
    let mean = total_days as f64 / filtered.len() as f64;
    // f64::round is half away from zero, matching the original rounding.
    let average_duration_days = (mean * 10.0).round() / 10.0;

    let peak_daily_occupancy = range
        .iter()
        .map(|day| occupancy(filtered, *day))
        .max()
        .unwrap_or(0);

    Statistics {
        population_size: filtered.len(),
        average_duration_days,
        peak_daily_occupancy,
    }
}
