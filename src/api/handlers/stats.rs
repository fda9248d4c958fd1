//! Handlers for per-club statistics and the dispersion chart.

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::filters::DateFilterParams;
use crate::api::dto::stats::{ClubStatsItem, DispersionResponse, StatsResponse};
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Per-club statistics in bag order.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Query Parameters
///
/// - `date` (optional): Single day (`YYYY-MM-DD`), wins over `from`/`to`
/// - `from` (optional): First day, inclusive
/// - `to` (optional): Last day, inclusive
///
/// Clubs without shots in range are included with `shot_count: 0` and
/// `average_distance: null`.
///
/// # Errors
///
/// Returns 400 Bad Request if a date is malformed or `from` is after `to`.
pub async fn stats_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    query: Result<Query<DateFilterParams>, QueryRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Query(params) = query?;
    let range = params.to_range()?;

    let rows = state.stats_service.club_stats(user, range).await?;
    let clubs: Vec<ClubStatsItem> = rows.into_iter().map(Into::into).collect();

    Ok(Json(StatsResponse {
        range,
        total_shots: clubs.iter().map(|c| c.shot_count).sum(),
        clubs,
    }))
}

/// Dispersion chart coordinates for the caller's shots.
///
/// # Endpoint
///
/// `GET /api/dispersion`
///
/// Accepts the same date parameters as [`stats_handler`]. Coordinates are
/// percentages of the chart box; `y` grows with distance.
///
/// # Errors
///
/// Returns 400 Bad Request for invalid dates.
pub async fn dispersion_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    query: Result<Query<DateFilterParams>, QueryRejection>,
) -> Result<Json<DispersionResponse>, AppError> {
    let Query(params) = query?;
    let range = params.to_range()?;

    let chart = state.stats_service.dispersion(user, range).await?;

    Ok(Json(DispersionResponse { range, chart }))
}
