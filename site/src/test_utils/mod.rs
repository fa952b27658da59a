//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! `stub_github` serves canned GitHub responses over real HTTP so the
//! reqwest adapter can be exercised end to end.

pub mod fixtures;
pub mod mocks;
pub mod stub_github;

pub use fixtures::*;
pub use mocks::*;
pub use stub_github::*;
