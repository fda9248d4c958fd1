//! Server-rendered dashboard.
//!
//! HTML pages for the account, the bag, the shot log and the statistics
//! page, rendered with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`middleware`] - Session cookie authentication
//! - [`routes`] - Dashboard route configuration
//! - [`forms`] - Submitted form bodies
//! - [`views`] - Template-ready rows
//! - [`error`] - Error page rendering

pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
