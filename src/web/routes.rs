//! Dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    clubs_page, create_club, delete_club, delete_shot, edit_club_page, index, log_shot,
    login_page, login_submit, logout, register_page, register_submit, shots_page, stats_page,
    update_club,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard pages that require a session.
///
/// Protected via [`crate::web::middleware::web_auth`]; without a valid
/// session cookie the browser is redirected to `/login`.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET|POST /clubs` - Bag listing and add-club form
/// - `GET|POST /clubs/{id}/edit` - Edit a club
/// - `POST /clubs/{id}/delete` - Delete a club and its shots
/// - `GET|POST /shots` - Shot log and log-shot form
/// - `POST /shots/{id}/delete` - Delete a shot
/// - `GET /stats` - Per-club statistics and dispersion chart
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/clubs", get(clubs_page).post(create_club))
        .route("/clubs/{id}/edit", get(edit_club_page).post(update_club))
        .route("/clubs/{id}/delete", post(delete_club))
        .route("/shots", get(shots_page).post(log_shot))
        .route("/shots/{id}/delete", post(delete_shot))
        .route("/stats", get(stats_page))
}

/// Account pages reachable without a session.
///
/// # Endpoints
///
/// - `GET|POST /login`
/// - `GET|POST /register`
/// - `GET /logout`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login_submit))
        .route("/register", get(register_page).post(register_submit))
        .route("/logout", get(logout))
}
