//! Record and date-range types for the bike-sharing dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Working-day flag for a rental record.
///
/// The dataset encodes this as the literal strings `No` (weekend/holiday) and
/// `Yes` (working day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkingDay {
    No,
    Yes,
}

impl fmt::Display for WorkingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkingDay::No => write!(f, "No"),
            WorkingDay::Yes => write!(f, "Yes"),
        }
    }
}

/// One pre-aggregated sharing-event record.
///
/// Each row carries both hour-level and day-level measures: `total_count_hour`
/// is the rental count for this row's hour, while `total_count_day` is the
/// daily count the row belongs to. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Hour of day (0-23); only present for hourly granularity
    pub hour: Option<u8>,
    /// Daily rental count
    pub total_count_day: f64,
    /// Hourly rental count
    pub total_count_hour: f64,
    /// Working-day flag
    pub workingday_day: WorkingDay,
    /// Weather categorical code
    pub weather_day: String,
    /// Season categorical code
    pub season_day: String,
}

/// An inclusive calendar-date interval.
///
/// A range where `start > end` is representable and simply matches no dates;
/// downstream filtering treats it as empty rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range (inclusive)
    pub start: NaiveDate,
    /// Last date in the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new date range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Clamp this range to the given bounds.
    ///
    /// The result never extends past `bounds` on either side. Clamping a range
    /// that lies entirely outside `bounds` produces an inverted (empty) range.
    pub fn clamp_to(&self, bounds: &DateRange) -> Self {
        Self {
            start: self.start.max(bounds.start),
            end: self.end.min(bounds.end),
        }
    }

    /// Whether the given date lies within the range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the range matches no dates at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
