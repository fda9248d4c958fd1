//! Shared application state injected into every handler.

use chrono::Duration;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, ClubService, ShotService, StatsService};
use crate::infrastructure::persistence::{
    SqliteClubRepository, SqliteSessionRepository, SqliteShotRepository, SqliteUserRepository,
};

pub type SqliteAuthService = AuthService<SqliteUserRepository, SqliteSessionRepository>;
pub type SqliteClubService = ClubService<SqliteClubRepository>;
pub type SqliteShotService = ShotService<SqliteClubRepository, SqliteShotRepository>;
pub type SqliteStatsService = StatsService<SqliteClubRepository, SqliteShotRepository>;

/// Services over the SQLite repositories, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub auth_service: Arc<SqliteAuthService>,
    pub club_service: Arc<SqliteClubService>,
    pub shot_service: Arc<SqliteShotService>,
    pub stats_service: Arc<SqliteStatsService>,
    /// Lifetime of new sessions, also the cookie `Max-Age`.
    pub session_ttl: Duration,
    /// Adds `Secure` to the session cookie.
    pub cookie_secure: bool,
}

impl AppState {
    /// Wires every repository and service on top of one pool.
    pub fn new(
        pool: Arc<SqlitePool>,
        session_secret: String,
        session_ttl: Duration,
        cookie_secure: bool,
    ) -> Self {
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
        let club_repository = Arc::new(SqliteClubRepository::new(pool.clone()));
        let shot_repository = Arc::new(SqliteShotRepository::new(pool.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(
                user_repository,
                session_repository,
                session_secret,
                session_ttl,
            )),
            session_ttl,
            club_service: Arc::new(ClubService::new(club_repository.clone())),
            shot_service: Arc::new(ShotService::new(
                club_repository.clone(),
                shot_repository.clone(),
            )),
            stats_service: Arc::new(StatsService::new(club_repository, shot_repository)),
            pool,
            cookie_secure,
        }
    }
}
