//! End-to-end tests over the store → filter → aggregate pipeline.

use bikeshare_dashboard::models::{DateRange, WorkingDay};
use bikeshare_dashboard::services::{
    compute_dashboard_data, daily_totals, filter_by_date_range, total_rentals,
};
use bikeshare_dashboard::store::RecordStore;
use chrono::NaiveDate;

/// A week of hourly data (two rows per day) with varying weather and seasons.
const WEEK_CSV: &str = "\
date,hour,total_count_day,total_count_hour,workingday_day,weather_day,season_day
2021-01-04,8,1000,60,Yes,Clear,Winter
2021-01-04,17,1000,90,Yes,Clear,Winter
2021-01-05,8,1100,65,Yes,Mist,Winter
2021-01-05,17,1100,95,Yes,Mist,Winter
2021-01-06,8,900,55,Yes,Rain,Winter
2021-01-06,17,900,80,Yes,Rain,Winter
2021-01-07,8,1200,70,Yes,Clear,Winter
2021-01-07,17,1200,100,Yes,Clear,Winter
2021-01-08,8,1150,68,Yes,Clear,Winter
2021-01-08,17,1150,98,Yes,Clear,Winter
2021-01-09,8,1500,85,No,Clear,Winter
2021-01-09,17,1500,120,No,Clear,Winter
2021-01-10,8,1400,80,No,Mist,Winter
2021-01-10,17,1400,110,No,Mist,Winter
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn week_store() -> RecordStore {
    RecordStore::from_reader(WEEK_CSV.as_bytes()).unwrap()
}

#[test]
fn full_bounds_range_yields_whole_dataset() {
    let store = week_store();
    let filtered = filter_by_date_range(store.records(), &store.bounds());

    assert_eq!(filtered.len(), store.len());
}

#[test]
fn filtered_rows_all_lie_within_range() {
    let store = week_store();
    let range = DateRange::new(date(2021, 1, 5), date(2021, 1, 7));

    let filtered = filter_by_date_range(store.records(), &range);
    assert_eq!(filtered.len(), 6);
    assert!(filtered.iter().all(|r| range.contains(r.date)));
}

#[test]
fn daily_table_sum_matches_filtered_row_sum() {
    let store = week_store();
    let range = DateRange::new(date(2021, 1, 4), date(2021, 1, 8));

    let filtered = filter_by_date_range(store.records(), &range);
    let row_sum: f64 = filtered.iter().map(|r| r.total_count_day).sum();

    let daily = daily_totals(&filtered);
    assert_eq!(total_rentals(&daily), row_sum);
}

#[test]
fn dashboard_over_full_week() {
    let store = week_store();
    let data = compute_dashboard_data(store.records(), &store.bounds());

    assert_eq!(data.row_count, 14);
    assert_eq!(data.daily_totals.len(), 7);

    // Two rows per day, so each daily total is twice the day count.
    assert_eq!(data.daily_totals[0].date, date(2021, 1, 4));
    assert_eq!(data.daily_totals[0].total_count, 2000.0);

    // Working-day buckets: Yes appears first in the file.
    assert_eq!(data.workday_weekend.len(), 2);
    assert_eq!(data.workday_weekend[0].working_day, WorkingDay::Yes);
    assert_eq!(data.workday_weekend[0].sample_count, 10);
    assert_eq!(data.workday_weekend[1].working_day, WorkingDay::No);
    assert_eq!(data.workday_weekend[1].sample_count, 4);

    // Only hours 8 and 17 occur; absent hours are omitted.
    assert_eq!(data.hourly.len(), 2);
    assert_eq!(data.hourly[0].hour, 8);
    assert_eq!(data.hourly[1].hour, 17);

    // Weather in first-appearance order.
    let labels: Vec<&str> = data.weather.iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, vec!["Clear", "Mist", "Rain"]);

    assert_eq!(data.season.len(), 1);
    assert_eq!(data.season[0].label, "Winter");
}

#[test]
fn weekend_mean_exceeds_weekday_mean_in_sample() {
    let store = week_store();
    let data = compute_dashboard_data(store.records(), &store.bounds());

    let weekday = data
        .workday_weekend
        .iter()
        .find(|b| b.working_day == WorkingDay::Yes)
        .unwrap();
    let weekend = data
        .workday_weekend
        .iter()
        .find(|b| b.working_day == WorkingDay::No)
        .unwrap();

    assert_eq!(weekday.mean_count, 1070.0);
    assert_eq!(weekend.mean_count, 1450.0);
}

#[test]
fn hourly_means_average_the_hour_measure() {
    let store = week_store();
    let data = compute_dashboard_data(store.records(), &store.bounds());

    let eight = data.hourly.iter().find(|h| h.hour == 8).unwrap();
    let expected = (60.0 + 65.0 + 55.0 + 70.0 + 68.0 + 85.0 + 80.0) / 7.0;
    assert!((eight.mean_count - expected).abs() < 1e-9);
    assert_eq!(eight.sample_count, 7);
}

#[test]
fn range_outside_dataset_degrades_to_empty_dashboard() {
    let store = week_store();
    let disjoint = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));
    let range = disjoint.clamp_to(&store.bounds());
    assert!(range.is_empty());

    let data = compute_dashboard_data(store.records(), &range);
    assert_eq!(data.row_count, 0);
    assert_eq!(data.total_rentals, 0.0);
    assert!(data.daily_totals.is_empty());
    assert!(data.hourly.is_empty());
}

#[test]
fn recompute_with_same_range_is_stable() {
    let store = week_store();
    let range = DateRange::new(date(2021, 1, 5), date(2021, 1, 9));

    let first = compute_dashboard_data(store.records(), &range);
    let second = compute_dashboard_data(store.records(), &range);
    assert_eq!(first, second);
}

#[test]
fn dashboard_data_serializes_to_json() {
    let store = week_store();
    let data = compute_dashboard_data(store.records(), &store.bounds());

    let value = serde_json::to_value(&data).unwrap();
    assert!(value.get("total_rentals").is_some());
    assert!(value.get("daily_totals").unwrap().is_array());
    assert_eq!(
        value.get("daily_totals").unwrap().as_array().unwrap().len(),
        7
    );
}
