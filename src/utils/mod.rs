//! Helpers shared by the services and request handlers.
//!
//! - [`random`] - Session token and salt generation
//! - [`dates`] - Parsing of optional date query parameters

pub mod dates;
pub mod random;
