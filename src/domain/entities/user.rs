//! User account and login session entities.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `password_hash` is an Argon2id PHC string produced by
/// [`crate::application::services::AuthService`]; the raw password is never stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// A login session. Only the keyed hash of the cookie token is stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Returns true if the session has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// The authenticated user a request acts on behalf of.
///
/// Inserted into request extensions by the auth middleware and passed
/// explicitly to every service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
}
