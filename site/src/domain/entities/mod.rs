//! Domain entities
//!
//! Plain data the feed pipeline and the page renderer work with.

pub mod load_state;
pub mod profile;
pub mod repository;

pub use load_state::LoadState;
pub use profile::{Certificate, Profile};
pub use repository::RepositorySummary;
