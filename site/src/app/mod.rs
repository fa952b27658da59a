//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod feed_loader;
pub mod feed_service;

pub use feed_loader::load_settled;
pub use feed_service::FeedService;
