//! Domain layer
//!
//! Contains pure data and policy with no external dependencies.
//! - `entities`: repository summaries, the feed load state and profile data
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
