//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::RepositorySummary;
use crate::domain::ports::GitHubClient;
use crate::error::FeedError;

/// Media type GitHub documents for its REST API
const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub rejects requests without a user agent
const USER_AGENT: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));

/// Anonymous GitHub REST client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, FeedError> {
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Fetch {
                status: status.as_u16(),
            });
        }

        // Read the body first so a malformed payload is a parse error, not a transport one
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Parse(e.to_string()))
    }
}

/// Response type from the GitHub API
#[derive(Deserialize)]
struct GitHubRepoResponse {
    id: i64,
    name: String,
    html_url: String,
    description: Option<String>,
    language: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    updated_at: chrono::DateTime<chrono::Utc>,
    homepage: Option<String>,
    #[serde(default)]
    fork: bool,
}

impl From<GitHubRepoResponse> for RepositorySummary {
    fn from(r: GitHubRepoResponse) -> Self {
        RepositorySummary {
            id: r.id,
            name: r.name,
            html_url: r.html_url,
            description: r.description,
            language: r.language,
            stargazers_count: r.stargazers_count,
            forks_count: r.forks_count,
            updated_at: r.updated_at,
            homepage: r.homepage.filter(|h| !h.trim().is_empty()),
            fork: r.fork,
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn list_user_repos(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FeedError> {
        let url = self.api_url(&format!("/users/{}/repos", encode(username)));
        tracing::debug!("Fetching repositories from {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("per_page", per_page.to_string()),
                ("sort", "updated".to_string()),
            ])
            .header(header::ACCEPT, GITHUB_JSON)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let repos: Vec<GitHubRepoResponse> = self.handle_response(response).await?;
        Ok(repos.into_iter().map(RepositorySummary::from).collect())
    }
}
