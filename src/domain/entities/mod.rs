//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Ordering and statistics live in
//! [`crate::domain::analysis`].
//!
//! # Entity Types
//!
//! - [`User`] / [`Session`] - Accounts and login sessions
//! - [`Club`] - A club in a user's bag
//! - [`Shot`] - A practice shot hit with a club
//!
//! Creation inputs use separate structs: `NewUser`, `NewClub`, `NewShot`.

pub mod club;
pub mod shot;
pub mod user;

pub use club::{Club, NewClub};
pub use shot::{NewShot, Shot, ShotWithClub};
pub use user::{CurrentUser, NewUser, Session, User};
