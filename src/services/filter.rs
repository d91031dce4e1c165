//! Date-range filtering over the record sequence.

use crate::models::{DateRange, RentalRecord};

/// Select the records whose date lies within `range`, inclusive on both ends.
///
/// The filter is a pure predicate: it preserves the relative order of the
/// input, tolerates sorted or unsorted input, and never fails. An inverted
/// range (`start > end`) yields an empty vector rather than an error.
/// Time-of-day plays no part; matching is at day granularity.
pub fn filter_by_date_range(rows: &[RentalRecord], range: &DateRange) -> Vec<RentalRecord> {
    rows.iter()
        .filter(|row| range.contains(row.date))
        .cloned()
        .collect()
}
