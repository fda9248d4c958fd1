//! Domain layer containing business entities and logic.
//!
//! Independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`analysis`] - Bag ordering, miss classification, statistics and
//!   dispersion layout over one user's clubs and shots
//!
//! # Request Flow
//!
//! 1. A handler resolves the [`entities::CurrentUser`]
//! 2. A service loads that user's clubs and shots through the repositories
//! 3. [`analysis`] turns them into ordered clubs, stats and plot points
//! 4. The handler renders a template or serializes JSON

pub mod analysis;
pub mod entities;
pub mod repositories;
