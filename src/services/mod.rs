//! Service layer: range filtering and the aggregation functions.
//!
//! These are the pure computations behind the dashboard. They take the record
//! slice and produce the tables the presentation layer renders; none of them
//! perform I/O and none of them can fail under well-typed input.

pub mod aggregate;

pub mod filter;

pub use aggregate::{
    compute_dashboard_data, daily_totals, hourly_means, season_means, total_rentals,
    weather_means, workday_weekend_means, CategoryAverage, DailyTotal, DashboardData,
    HourlyAverage, WorkingDayAverage,
};
pub use filter::filter_by_date_range;
