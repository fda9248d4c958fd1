//! Data Transfer Objects for API requests and responses.

pub mod clubs;
pub mod filters;
pub mod health;
pub mod stats;
