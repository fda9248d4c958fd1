//! Random token generation for sessions and password salts.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Bytes of entropy in a session token.
pub const TOKEN_BYTES: usize = 32;

/// Bytes of entropy in a password salt.
pub const SALT_BYTES: usize = 16;

/// Returns `len` bytes from the OS random source.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, AppError> {
    let mut buffer = vec![0u8; len];

    getrandom::fill(&mut buffer).map_err(|e| {
        tracing::error!(error = %e, "system RNG failure");
        AppError::internal("Failed to generate random bytes", json!({}))
    })?;

    Ok(buffer)
}

/// Returns `len` random bytes encoded as URL-safe base64 without padding.
///
/// # Errors
///
/// See [`random_bytes`].
pub fn random_string(len: usize) -> Result<String, AppError> {
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(random_bytes(len)?))
}

/// Generates a new session token (43 URL-safe characters).
///
/// # Errors
///
/// See [`random_string`].
pub fn generate_token() -> Result<String, AppError> {
    random_string(TOKEN_BYTES)
}
