//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! Clones share state, so a test can keep a handle after giving one away.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::domain::entities::RepositorySummary;
use crate::domain::ports::GitHubClient;
use crate::error::FeedError;

// ============================================================================
// Mock GitHub Client
// ============================================================================

#[derive(Clone)]
enum MockFailure {
    Status(u16),
    Parse(String),
}

#[derive(Default)]
struct MockGitHubState {
    repos: Vec<RepositorySummary>,
    failure: Option<MockFailure>,
    calls: Vec<(String, u8)>,
    completed: usize,
}

/// Configurable GitHub client.
///
/// A gated client records the call, signals `wait_for_request`, and then
/// holds the response until `release` is called.
#[derive(Clone, Default)]
pub struct MockGitHubClient {
    state: Arc<Mutex<MockGitHubState>>,
    gate: Option<Arc<Notify>>,
    started: Arc<Notify>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repos(self, repos: Vec<RepositorySummary>) -> Self {
        self.state.lock().unwrap().repos = repos;
        self
    }

    pub fn failing_with_status(self, status: u16) -> Self {
        self.state.lock().unwrap().failure = Some(MockFailure::Status(status));
        self
    }

    pub fn failing_to_parse(self, reason: &str) -> Self {
        self.state.lock().unwrap().failure = Some(MockFailure::Parse(reason.to_string()));
        self
    }

    /// Answer later requests with `repos`, dropping any configured failure
    pub fn succeed_with(&self, repos: Vec<RepositorySummary>) {
        let mut state = self.state.lock().unwrap();
        state.repos = repos;
        state.failure = None;
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Calls made so far as `(username, per_page)`
    pub fn calls(&self) -> Vec<(String, u8)> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Requests that ran to completion rather than being dropped mid-flight
    pub fn completed(&self) -> usize {
        self.state.lock().unwrap().completed
    }

    /// Wait until a request has reached the client
    pub async fn wait_for_request(&self) {
        self.started.notified().await;
    }

    /// Let a gated request complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn list_user_repos(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FeedError> {
        let (repos, failure) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push((username.to_string(), per_page));
            (state.repos.clone(), state.failure.clone())
        };
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.state.lock().unwrap().completed += 1;

        match failure {
            Some(MockFailure::Status(status)) => Err(FeedError::Fetch { status }),
            Some(MockFailure::Parse(reason)) => Err(FeedError::Parse(reason)),
            None => Ok(repos),
        }
    }
}
