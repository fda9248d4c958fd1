//! Application layer services implementing business logic.
//!
//! Services consume repository traits, enforce per-user scoping and input
//! rules, and hand the loaded clubs and shots to [`crate::domain::analysis`].
//! Every call that touches user data takes the
//! [`crate::domain::entities::CurrentUser`] explicitly.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login and sessions
//! - [`services::club_service::ClubService`] - Clubs in bag order
//! - [`services::shot_service::ShotService`] - Shot logging and listing
//! - [`services::stats_service::StatsService`] - Per-club stats and dispersion chart

pub mod services;
