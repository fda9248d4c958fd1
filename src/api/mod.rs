//! JSON API layer.
//!
//! Read-only endpoints over the same services the web pages use, for
//! scripts and external dashboards.
//!
//! # Modules
//!
//! - [`dto`] - Response and query parameter types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, rate limiting and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
