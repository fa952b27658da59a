//! Repository summary entity
//!
//! The subset of a GitHub repository the showcase needs. Read-only to
//! this system: it is produced by the GitHub adapter and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public repository as shown in the project showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Unique per source account
    pub id: i64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    /// Primary language tag as reported by GitHub
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    /// Live deployment URL, never blank
    pub homepage: Option<String>,
    pub fork: bool,
}

impl RepositorySummary {
    /// Homepage link worth rendering, if any
    pub fn live_url(&self) -> Option<&str> {
        self.homepage.as_deref()
    }
}
