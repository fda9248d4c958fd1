//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clubs;
pub mod health;
pub mod stats;

pub use clubs::clubs_handler;
pub use health::health_handler;
pub use stats::{dispersion_handler, stats_handler};
