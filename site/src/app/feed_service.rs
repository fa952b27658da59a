//! Feed service
//!
//! Fetches an account's public repositories and applies the showcase
//! policy: forks out, most starred first, most recently updated on ties,
//! top six only.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::entities::RepositorySummary;
use crate::domain::ports::GitHubClient;
use crate::error::FeedError;

/// Maximum number of repositories shown in the showcase
pub const FEED_LIMIT: usize = 6;

/// Records requested from GitHub in the single listing call
pub const FETCH_PAGE_SIZE: u8 = 100;

/// Showcase order: stars descending, then last update descending
pub fn compare_showcase(a: &RepositorySummary, b: &RepositorySummary) -> Ordering {
    b.stargazers_count
        .cmp(&a.stargazers_count)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

/// Filter, sort and truncate a fetched listing.
///
/// `sort_by` is stable, so exact ties keep their input order.
pub fn select_showcase(repos: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    let mut showcase: Vec<RepositorySummary> = repos.into_iter().filter(|r| !r.fork).collect();
    showcase.sort_by(compare_showcase);
    showcase.truncate(FEED_LIMIT);
    showcase
}

/// Service for loading the repository showcase
pub struct FeedService<GC>
where
    GC: GitHubClient + ?Sized,
{
    github: Arc<GC>,
}

impl<GC> FeedService<GC>
where
    GC: GitHubClient + ?Sized,
{
    pub fn new(github: Arc<GC>) -> Self {
        Self { github }
    }

    /// Fetch the account's repositories and return the showcase selection
    pub async fn load_feed(
        &self,
        account_handle: &str,
    ) -> Result<Vec<RepositorySummary>, FeedError> {
        if account_handle.trim().is_empty() {
            return Err(FeedError::InvalidHandle);
        }

        let repos = self
            .github
            .list_user_repos(account_handle, FETCH_PAGE_SIZE)
            .await?;
        let fetched = repos.len();
        let showcase = select_showcase(repos);

        tracing::debug!(
            "Selected {} of {} repositories for {}",
            showcase.len(),
            fetched,
            account_handle
        );

        Ok(showcase)
    }
}
