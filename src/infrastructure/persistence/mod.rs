//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs. The schema lives in
//! `migrations/` and is applied with `sqlx::migrate!` at startup.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`] - User accounts
//! - [`SqliteSessionRepository`] - Login sessions
//! - [`SqliteClubRepository`] - Clubs, filtered by owner
//! - [`SqliteShotRepository`] - Shots, owner checked through their club

pub mod sqlite_club_repository;
pub mod sqlite_session_repository;
pub mod sqlite_shot_repository;
pub mod sqlite_user_repository;

pub use sqlite_club_repository::SqliteClubRepository;
pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_shot_repository::SqliteShotRepository;
pub use sqlite_user_repository::SqliteUserRepository;
