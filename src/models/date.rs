use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed offset in whole days between the spreadsheet day-serial epoch
/// (1899-12-30) and the Unix epoch (1970-01-01).
pub const SERIAL_UNIX_OFFSET_DAYS: f64 = 25569.0;

/// Calendar day with no time-of-day component and no timezone.
///
/// All stay intervals and range computations operate at this granularity.
/// Values compare and order by calendar day regardless of which raw
/// encoding (ISO string, day-serial number, native date) they came from.
/// Serializes as an ISO-8601 `YYYY-MM-DD` string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create from a chrono naive date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create from year/month/day, if the combination is a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn parse_iso(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self)
    }

    /// Create from a spreadsheet day-serial number, where day 0 is
    /// 1899-12-30. Fractional serials carry a time-of-day component and
    /// truncate to the containing day.
    pub fn from_day_serial(serial: f64) -> Option<Self> {
        if !serial.is_finite() {
            return None;
        }
        let days = (serial - SERIAL_UNIX_OFFSET_DAYS).floor();
        if days < i64::MIN as f64 || days > i64::MAX as f64 {
            return None;
        }
        let epoch = chrono::DateTime::UNIX_EPOCH.date_naive();
        let delta = TimeDelta::try_days(days as i64)?;
        epoch.checked_add_signed(delta).map(Self)
    }

    /// Underlying chrono date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day, unless at the representable maximum.
    pub fn next(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Whole days from `earlier` to `self`; negative if `self` is earlier.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate::new(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
