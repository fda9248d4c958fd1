//! HTML page handlers for the dashboard.

mod auth;
mod clubs;
mod home;
mod shots;
mod stats;

pub use auth::{login_page, login_submit, logout, register_page, register_submit};
pub use clubs::{clubs_page, create_club, delete_club, edit_club_page, update_club};
pub use home::index;
pub use shots::{delete_shot, log_shot, shots_page};
pub use stats::stats_page;
