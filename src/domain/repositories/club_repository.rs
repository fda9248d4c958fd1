//! Repository trait for clubs.

use crate::domain::entities::{Club, NewClub};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for a user's clubs.
///
/// Every method is scoped by `user_id`; a club owned by someone else behaves
/// exactly like a club that does not exist.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteClubRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Lists the user's clubs in insertion order.
    ///
    /// Bag order is applied by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Club>, AppError>;

    /// Finds one of the user's clubs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_for_user(&self, user_id: i64, club_id: i64) -> Result<Option<Club>, AppError>;

    /// Creates a club owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, new_club: NewClub) -> Result<Club, AppError>;

    /// Replaces the editable fields of one of the user's clubs.
    ///
    /// Returns `None` if the club does not exist or belongs to another user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        user_id: i64,
        club_id: i64,
        changes: NewClub,
    ) -> Result<Option<Club>, AppError>;

    /// Deletes one of the user's clubs and all of its shots.
    ///
    /// Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user_id: i64, club_id: i64) -> Result<bool, AppError>;
}
