//! Repository trait for login sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for cookie sessions.
///
/// Only keyed hashes of session tokens are passed in; raw tokens never reach
/// storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, AppError>;

    /// Finds an unexpired session by token hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Deletes the session with the given token hash, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;

    /// Deletes all expired sessions and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn purge_expired(&self) -> Result<u64, AppError>;
}
