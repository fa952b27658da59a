//! HTTP handlers
//!
//! Axum request handlers for the site endpoints.

pub mod page;
pub mod projects;

pub use page::{get_page, not_found};
pub use projects::get_projects;
