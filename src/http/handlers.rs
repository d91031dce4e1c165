//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for the actual computations.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use super::dto::{DashboardData, DatasetResponse, HealthResponse, RangeQuery};
use super::error::AppError;
use super::state::AppState;
use crate::models::DateRange;
use crate::services::compute_dashboard_data;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset is
/// loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        rows: state.store.len(),
    }))
}

/// GET /v1/dataset
///
/// Dataset metadata: row count and observed date bounds. The frontend uses
/// the bounds to initialize and limit its date-range selector.
pub async fn get_dataset(State(state): State<AppState>) -> HandlerResult<DatasetResponse> {
    let bounds = state.store.bounds();

    Ok(Json(DatasetResponse {
        row_count: state.store.len(),
        min_date: bounds.start,
        max_date: bounds.end,
    }))
}

/// GET /v1/dashboard?start=YYYY-MM-DD&end=YYYY-MM-DD
///
/// Compute the full dashboard payload for the requested date range: the
/// total-rentals scalar plus all five aggregate tables.
///
/// Missing bounds default to the dataset bounds and out-of-bounds values are
/// clamped, mirroring a date picker limited to the observed dates. A range
/// that ends up empty after clamping returns empty tables and a zero total
/// rather than an error. An unparseable bound is a 400 with the standard
/// error envelope.
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> HandlerResult<DashboardData> {
    let Query(query) = query.map_err(|rejection| {
        AppError::BadRequest(format!("invalid query parameter: {}", rejection.body_text()))
    })?;

    let bounds = state.store.bounds();
    let range = DateRange::new(
        query.start.unwrap_or(bounds.start),
        query.end.unwrap_or(bounds.end),
    )
    .clamp_to(&bounds);

    // Full recompute per interaction; run it off the async worker threads.
    let store = state.store.clone();
    let data = tokio::task::spawn_blocking(move || {
        compute_dashboard_data(store.records(), &range)
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))?;

    Ok(Json(data))
}
