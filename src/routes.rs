//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `/`, `/clubs`, `/shots`, `/stats` - Dashboard pages (cookie session required)
//! - `/login`, `/register`, `/logout` - Account pages (public)
//! - `/api/*`                         - JSON API (Bearer session token required)
//! - `GET /health`                    - Database probe (public)
//! - `/static/*`                      - Stylesheet and other assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on account forms
//! - **Authentication** - Bearer token (API) or session cookie (web)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the returned service must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer());

    let web_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::layer());

    let web_public = web::routes::public_routes().layer(rate_limit::secure_layer());

    let router = Router::new()
        .merge(web_protected)
        .merge(web_public)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
