//! Business logic services for the application layer.

pub mod auth_service;
pub mod club_service;
pub mod shot_service;
pub mod stats_service;

pub use auth_service::AuthService;
pub use club_service::ClubService;
pub use shot_service::{ShotDraft, ShotService};
pub use stats_service::{ClubStatsRow, StatsReport, StatsService, StatsSummary};
