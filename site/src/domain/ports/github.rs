//! GitHub client port trait
//!
//! Defines the interface for reading public repository listings.

use async_trait::async_trait;

use crate::domain::entities::RepositorySummary;
use crate::error::FeedError;

/// Port trait for GitHub API operations
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// List public repositories of a user, most recently updated first.
    ///
    /// Issues exactly one request for up to `per_page` records. Non-success
    /// statuses map to `FeedError::Fetch`, malformed bodies to
    /// `FeedError::Parse`.
    async fn list_user_repos(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FeedError>;
}
