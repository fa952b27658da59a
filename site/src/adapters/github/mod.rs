//! GitHub adapter
//!
//! reqwest-backed implementation of the GitHub client port.

pub mod client;

pub use client::GitHubClientImpl;
