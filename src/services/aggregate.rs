//! Grouped aggregations over the filtered record sequence.
//!
//! Each function buckets rows by one key and reduces one numeric measure per
//! bucket, returning an ordered table. Buckets with no contributing rows are
//! omitted, never zero-filled, so the mean of zero elements is never computed
//! and an empty input yields an empty table for every aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DateRange, RentalRecord, WorkingDay};

use super::filter::filter_by_date_range;

/// One point of the daily-totals time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_count: f64,
}

/// Mean daily rentals for one working-day flag value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingDayAverage {
    pub working_day: WorkingDay,
    pub mean_count: f64,
    pub sample_count: usize,
}

/// Mean hourly rentals for one hour of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyAverage {
    pub hour: u8,
    pub mean_count: f64,
    pub sample_count: usize,
}

/// Mean daily rentals for one categorical code (weather or season).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub label: String,
    pub mean_count: f64,
    pub sample_count: usize,
}

/// Everything one dashboard interaction needs: the summary scalar plus the
/// five aggregate tables, recomputed in full from the filtered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// The (already clamped) range the tables were computed for
    pub range: DateRange,
    /// Number of records in the filtered view
    pub row_count: usize,
    /// Total rentals in range: sum over the daily-totals table
    pub total_rentals: f64,
    pub daily_totals: Vec<DailyTotal>,
    pub workday_weekend: Vec<WorkingDayAverage>,
    pub hourly: Vec<HourlyAverage>,
    pub weather: Vec<CategoryAverage>,
    pub season: Vec<CategoryAverage>,
}

/// Bucket rows by calendar date and sum `total_count_day` per bucket.
///
/// Buckets are ordered chronologically. The sum over the returned table equals
/// the sum of `total_count_day` over the input rows.
pub fn daily_totals(rows: &[RentalRecord]) -> Vec<DailyTotal> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *buckets.entry(row.date).or_insert(0.0) += row.total_count_day;
    }

    buckets
        .into_iter()
        .map(|(date, total_count)| DailyTotal { date, total_count })
        .collect()
}

/// Bucket rows by working-day flag and average `total_count_day` per bucket.
///
/// Bucket order follows first appearance of each flag value in the input; no
/// ranking is implied.
pub fn workday_weekend_means(rows: &[RentalRecord]) -> Vec<WorkingDayAverage> {
    let mut buckets: Vec<(WorkingDay, f64, usize)> = Vec::new();
    for row in rows {
        match buckets.iter_mut().find(|(flag, _, _)| *flag == row.workingday_day) {
            Some((_, sum, count)) => {
                *sum += row.total_count_day;
                *count += 1;
            }
            None => buckets.push((row.workingday_day, row.total_count_day, 1)),
        }
    }

    buckets
        .into_iter()
        .map(|(working_day, sum, count)| WorkingDayAverage {
            working_day,
            mean_count: sum / count as f64,
            sample_count: count,
        })
        .collect()
}

/// Bucket rows by hour of day and average `total_count_hour` per bucket.
///
/// Rows without an hour (day-granularity records) are skipped. Buckets are
/// ordered by hour ascending; hours with no rows in the filtered set are
/// omitted, so the table holds up to 24 rows.
pub fn hourly_means(rows: &[RentalRecord]) -> Vec<HourlyAverage> {
    let mut buckets: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for row in rows {
        if let Some(hour) = row.hour {
            let (sum, count) = buckets.entry(hour).or_insert((0.0, 0));
            *sum += row.total_count_hour;
            *count += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(hour, (sum, count))| HourlyAverage {
            hour,
            mean_count: sum / count as f64,
            sample_count: count,
        })
        .collect()
}

/// Bucket rows by weather code and average `total_count_day` per bucket.
pub fn weather_means(rows: &[RentalRecord]) -> Vec<CategoryAverage> {
    category_means(rows, |row| &row.weather_day)
}

/// Bucket rows by season code and average `total_count_day` per bucket.
pub fn season_means(rows: &[RentalRecord]) -> Vec<CategoryAverage> {
    category_means(rows, |row| &row.season_day)
}

/// Shared reduction for the categorical tables: group by the extracted key,
/// average `total_count_day`, keep first-appearance order.
fn category_means<F>(rows: &[RentalRecord], key: F) -> Vec<CategoryAverage>
where
    F: Fn(&RentalRecord) -> &str,
{
    let mut buckets: Vec<(String, f64, usize)> = Vec::new();
    for row in rows {
        let label = key(row);
        match buckets.iter_mut().find(|(existing, _, _)| existing == label) {
            Some((_, sum, count)) => {
                *sum += row.total_count_day;
                *count += 1;
            }
            None => buckets.push((label.to_string(), row.total_count_day, 1)),
        }
    }

    buckets
        .into_iter()
        .map(|(label, sum, count)| CategoryAverage {
            label,
            mean_count: sum / count as f64,
            sample_count: count,
        })
        .collect()
}

/// Summary scalar for the dashboard header: total rentals over the range.
pub fn total_rentals(daily: &[DailyTotal]) -> f64 {
    daily.iter().map(|point| point.total_count).sum()
}

/// Filter `rows` to `range` and compute all aggregate tables plus the summary
/// scalar. This is the unit of work behind one dashboard interaction.
pub fn compute_dashboard_data(rows: &[RentalRecord], range: &DateRange) -> DashboardData {
    let filtered = filter_by_date_range(rows, range);

    let daily = daily_totals(&filtered);
    let total = total_rentals(&daily);

    DashboardData {
        range: *range,
        row_count: filtered.len(),
        total_rentals: total,
        workday_weekend: workday_weekend_means(&filtered),
        hourly: hourly_means(&filtered),
        weather: weather_means(&filtered),
        season: season_means(&filtered),
        daily_totals: daily,
    }
}
