//! API route configuration.
//!
//! All API endpoints require a Bearer session token via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{clubs_handler, dispersion_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer authentication.
///
/// # Endpoints
///
/// - `GET /clubs`      - Clubs in bag order
/// - `GET /stats`      - Per-club statistics (`date` or `from`/`to` filter)
/// - `GET /dispersion` - Dispersion chart points, ticks and legend
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(clubs_handler))
        .route("/stats", get(stats_handler))
        .route("/dispersion", get(dispersion_handler))
}
