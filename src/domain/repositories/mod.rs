//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User accounts
//! - [`SessionRepository`] - Login sessions
//! - [`ClubRepository`] - Clubs, scoped by owner
//! - [`ShotRepository`] - Shots, scoped by the owning club's user
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod club_repository;
pub mod session_repository;
pub mod shot_repository;
pub mod user_repository;

pub use club_repository::ClubRepository;
pub use session_repository::SessionRepository;
pub use shot_repository::ShotRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use club_repository::MockClubRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use shot_repository::MockShotRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
