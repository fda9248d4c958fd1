//! # Golf Practice
//!
//! A practice log for golfers built with Axum and SQLite: keep a bag of
//! clubs, log range shots against them, and read per-club statistics and a
//! shot dispersion chart.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the pure
//!   analysis functions (miss classification, bag order, stats, dispersion)
//! - **Application Layer** ([`application`]) - Services scoped to the current user
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered dashboard
//!
//! ## Quick Start
//!
//! ```bash
//! export SESSION_SECRET="change-me"
//! export DB_PATH="golf.db"          # Optional
//!
//! # Migrations run on startup
//! cargo run
//!
//! # Create an account from the command line
//! cargo run --bin admin -- user create --username alice
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin CLI
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, ClubService, ShotService, StatsService};
    pub use crate::domain::analysis::{ClubStats, DateRange, MissBucket};
    pub use crate::domain::entities::{Club, CurrentUser, NewClub, NewShot, Shot, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
