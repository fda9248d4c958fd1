//! Registration, login and session authentication.

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{CurrentUser, NewUser, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::random::{SALT_BYTES, generate_token, random_bytes};
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

const MAX_USERNAME_LEN: usize = 64;

/// Service for user accounts and cookie/Bearer sessions.
///
/// Passwords are stored as Argon2id PHC strings. Session tokens are hashed
/// with HMAC-SHA256 keyed by `secret`, so a database dump alone cannot be
/// replayed as a session.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    secret: String,
    session_ttl: Duration,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` / `sessions` - repositories for DB operations
    /// - `secret` - session token HMAC key; changing it ends all sessions
    /// - `session_ttl` - lifetime of a new session
    pub fn new(users: Arc<U>, sessions: Arc<S>, secret: String, session_ttl: Duration) -> Self {
        Self {
            users,
            sessions,
            secret,
            session_ttl,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key length")
    }

    /// Hashes a raw session token. Returns 64 lowercase hex characters.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = self.mac();
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Produces an Argon2id PHC string (`$argon2id$v=19$...`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no salt could be generated or
    /// hashing fails.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::encode_b64(&random_bytes(SALT_BYTES)?).map_err(|e| {
            tracing::error!(error = %e, "failed to encode password salt");
            AppError::internal("Failed to hash password", json!({}))
        })?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing failed");
                AppError::internal("Failed to hash password", json!({}))
            })
    }

    /// Checks a password against a stored PHC string.
    ///
    /// Unparseable hashes never verify.
    pub fn verify_password(&self, password: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or password is
    /// missing or the confirmation does not match.
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<User, AppError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() || confirmation.is_empty() {
            return Err(AppError::bad_request(
                "Must provide username and password (twice)",
                json!({}),
            ));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(AppError::bad_request(
                "Username is too long",
                json!({ "max_length": MAX_USERNAME_LEN }),
            ));
        }
        if password != confirmation {
            return Err(AppError::bad_request("Passwords do not match", json!({})));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ));
        }

        let user = self
            .users
            .create(NewUser {
                username: username.to_string(),
                password_hash: self.hash_password(password)?,
            })
            .await?;

        tracing::info!(user_id = user.id, "user registered");

        Ok(user)
    }

    /// Verifies credentials and opens a session.
    ///
    /// Returns the raw session token; only its hash is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on missing or wrong credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AppError::bad_request(
                "Must provide username and password",
                json!({}),
            ));
        }

        let user = self.users.find_by_username(username).await?;
        let user = match user {
            Some(user) if self.verify_password(password, &user.password_hash) => user,
            _ => {
                tracing::warn!(username, "failed login attempt");
                return Err(AppError::bad_request(
                    "Invalid username or password",
                    json!({}),
                ));
            }
        };

        self.open_session(user.id).await
    }

    /// Creates a session for an already verified user and returns its raw token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or RNG errors.
    pub async fn open_session(&self, user_id: i64) -> Result<String, AppError> {
        let token = generate_token()?;
        let expires_at = Utc::now() + self.session_ttl;

        self.sessions
            .create(user_id, &self.hash_token(&token), expires_at)
            .await?;

        tracing::debug!(user_id, "session opened");

        Ok(token)
    }

    /// Resolves a raw session token to the user it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or expired.
    pub async fn authenticate(&self, token: &str) -> Result<CurrentUser, AppError> {
        let session = self
            .sessions
            .find_active(&self.hash_token(token))
            .await?
            .filter(|s| !s.is_expired())
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired session" }),
                )
            })?;

        Ok(CurrentUser {
            user_id: session.user_id,
        })
    }

    /// Revokes the session behind a raw token. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.sessions.delete(&self.hash_token(token)).await
    }

    /// Deletes expired sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn purge_expired_sessions(&self) -> Result<u64, AppError> {
        let removed = self.sessions.purge_expired().await?;
        if removed > 0 {
            tracing::info!(removed, "expired sessions purged");
        }
        Ok(removed)
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user no longer exists.
    pub async fn user(&self, user: CurrentUser) -> Result<User, AppError> {
        self.users
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "user_id": user.user_id })))
    }

    /// Lists all users ordered by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Deletes a user with all their sessions, clubs and shots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn delete_user(&self, username: &str) -> Result<(), AppError> {
        let user = self.find_user(username).await?;
        self.users.delete(user.id).await?;
        tracing::info!(user_id = user.id, "user deleted");
        Ok(())
    }

    /// Looks up a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn find_user(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "username": username })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Session;
    use crate::domain::repositories::{MockSessionRepository, MockUserRepository};

    fn test_secret() -> String {
        "test-session-secret".to_string()
    }

    fn service(
        users: MockUserRepository,
        sessions: MockSessionRepository,
    ) -> AuthService<MockUserRepository, MockSessionRepository> {
        AuthService::new(
            Arc::new(users),
            Arc::new(sessions),
            test_secret(),
            Duration::hours(1),
        )
    }

    fn empty_service() -> AuthService<MockUserRepository, MockSessionRepository> {
        service(MockUserRepository::new(), MockSessionRepository::new())
    }

    fn user_with_hash(hash: String) -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            password_hash: hash,
            created_at: Utc::now(),
        }
    }

    fn session(user_id: i64, expires_in: Duration) -> Session {
        Session {
            id: 1,
            user_id,
            token_hash: "hash".to_string(),
            created_at: Utc::now(),
            expires_at: Utc::now() + expires_in,
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let svc = empty_service();
        let stored = svc.hash_password("hunter22").unwrap();

        assert!(stored.starts_with("$argon2id$"));
        assert!(!stored.contains("hunter22"));
        assert!(svc.verify_password("hunter22", &stored));
        assert!(!svc.verify_password("hunter23", &stored));
    }

    #[test]
    fn test_password_hash_is_salted() {
        let svc = empty_service();
        assert_ne!(
            svc.hash_password("same").unwrap(),
            svc.hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let svc = empty_service();
        assert!(!svc.verify_password("pw", ""));
        assert!(!svc.verify_password("pw", "no-separator"));
        assert!(!svc.verify_password("pw", "salt$not-hex"));
        assert!(!svc.verify_password("pw", "$argon2id$garbage"));
    }

    #[test]
    fn test_rotating_secret_keeps_passwords_and_ends_sessions() {
        let a = empty_service();
        let b = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockSessionRepository::new()),
            "rotated-secret".to_string(),
            Duration::hours(1),
        );

        let stored = a.hash_password("pw").unwrap();
        assert!(b.verify_password("pw", &stored));
        assert!(!b.verify_password("other", &stored));

        assert_ne!(a.hash_token("token"), b.hash_token("token"));
        assert_eq!(a.hash_token("token").len(), 64);
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|new_user| new_user.username == "alice" && new_user.password_hash != "pw")
            .times(1)
            .returning(|new_user| Ok(user_with_hash(new_user.password_hash)));

        let svc = service(users, MockSessionRepository::new());
        let user = svc.register("  alice ", "pw", "pw").await.unwrap();

        assert_eq!(user.username, "alice");
        assert!(svc.verify_password("pw", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let svc = empty_service();

        for (name, pw, confirm) in [("", "pw", "pw"), ("bob", "", ""), ("bob", "pw", "")] {
            let err = svc.register(name, pw, confirm).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let err = empty_service()
            .register("bob", "one", "two")
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Passwords do not match");
    }

    #[tokio::test]
    async fn test_register_username_taken() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(user_with_hash("x$00".to_string()))));

        let err = service(users, MockSessionRepository::new())
            .register("alice", "pw", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_login_success_stores_hashed_token() {
        let stored = empty_service().hash_password("secret").unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user_with_hash(stored.clone()))));

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_create()
            .withf(|user_id, token_hash, _| *user_id == 7 && token_hash.len() == 64)
            .times(1)
            .returning(|user_id, token_hash, expires_at| {
                Ok(Session {
                    id: 1,
                    user_id,
                    token_hash: token_hash.to_string(),
                    created_at: Utc::now(),
                    expires_at,
                })
            });

        let token = service(users, sessions)
            .login("alice", "secret")
            .await
            .unwrap();

        assert_eq!(token.len(), 43);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let stored = empty_service().hash_password("secret").unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user_with_hash(stored.clone()))));

        let err = service(users, MockSessionRepository::new())
            .login("alice", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let err = service(users, MockSessionRepository::new())
            .login("ghost", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let expected_hash = empty_service().hash_token("raw-token");

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_active()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(session(7, Duration::hours(1)))));

        let current = service(MockUserRepository::new(), sessions)
            .authenticate("raw-token")
            .await
            .unwrap();

        assert_eq!(current, CurrentUser { user_id: 7 });
    }

    #[tokio::test]
    async fn test_authenticate_unknown_or_expired() {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_find_active().times(1).returning(|_| Ok(None));
        let err = service(MockUserRepository::new(), sessions)
            .authenticate("nope")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_active()
            .returning(|_| Ok(Some(session(7, Duration::seconds(-5)))));
        let err = service(MockUserRepository::new(), sessions)
            .authenticate("stale")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_logout_deletes_hashed_token() {
        let expected_hash = empty_service().hash_token("raw-token");

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_delete()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(()));

        service(MockUserRepository::new(), sessions)
            .logout("raw-token")
            .await
            .unwrap();
    }
}
