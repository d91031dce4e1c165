//! Data Transfer Objects for the HTTP API.
//!
//! The aggregate tables are re-exported from the service layer since they
//! already derive Serialize/Deserialize; only the request/response envelopes
//! live here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::services::aggregate::{
    CategoryAverage, DailyTotal, DashboardData, HourlyAverage, WorkingDayAverage,
};

/// Query parameters for the dashboard endpoint.
///
/// Both bounds are optional; a missing bound defaults to the corresponding
/// dataset bound, matching a date picker initialized to the full dataset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RangeQuery {
    /// Start of the range (inclusive), `YYYY-MM-DD`
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// End of the range (inclusive), `YYYY-MM-DD`
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Number of records loaded in the store
    pub rows: usize,
}

/// Dataset metadata: what the frontend binds its date picker to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetResponse {
    /// Number of records in the dataset
    pub row_count: usize,
    /// Earliest date in the dataset
    pub min_date: NaiveDate,
    /// Latest date in the dataset
    pub max_date: NaiveDate,
}
