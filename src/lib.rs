//! # Bikeshare Dashboard Backend
//!
//! Analytics backend for an interactive bike-sharing dashboard.
//!
//! This crate loads a pre-aggregated bike-sharing dataset from a CSV file into
//! a read-only record store, filters it by a user-supplied date range, and
//! computes the grouped aggregates behind the dashboard's charts: daily rental
//! totals, workday/weekend averages, hourly averages, and weather and season
//! averages. The backend exposes a REST API via Axum for the frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core record, date-range, and categorical types
//! - [`store`]: CSV loading and the read-only record store
//! - [`services`]: Range filtering and the aggregation layer
//! - [`config`]: Environment-variable configuration for the server
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Data flow
//!
//! ```text
//! CSV file ──▶ RecordStore ──▶ filter_by_date_range ──▶ aggregations ──▶ JSON
//! ```
//!
//! The store is loaded once at startup and shared read-only; every request
//! recomputes the filtered view and all aggregate tables in full.

pub mod config;

pub mod models;

pub mod services;

pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
