//! Repository trait for shots.

use crate::domain::analysis::DateRange;
use crate::domain::entities::{NewShot, Shot};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for practice shots.
///
/// Shots are owned through their club, so reads and deletes join on the
/// club's `user_id`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShotRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShotRepository: Send + Sync {
    /// Lists the user's shots within `range`, newest first
    /// (date descending, then id descending).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(&self, user_id: i64, range: DateRange) -> Result<Vec<Shot>, AppError>;

    /// Records a new shot. Ownership of `club_id` is checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the club does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_shot: NewShot) -> Result<Shot, AppError>;

    /// Deletes one of the user's shots.
    ///
    /// Returns `false` if the shot does not exist or belongs to another user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user_id: i64, shot_id: i64) -> Result<bool, AppError>;

    /// Counts the user's shots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_for_user(&self, user_id: i64) -> Result<i64, AppError>;
}
