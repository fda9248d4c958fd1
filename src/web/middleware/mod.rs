//! Dashboard middleware.

pub mod web_auth;
