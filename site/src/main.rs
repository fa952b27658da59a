//! Portfolio site
//!
//! Serves a single-page personal portfolio. The project section is fed
//! by the account's public GitHub repositories, loaded afresh for every
//! page view.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod page;

#[cfg(test)]
mod test_utils;


use adapters::GitHubClientImpl;
use app::FeedService;
use config::Config;
use domain::entities::Profile;
use domain::ports::GitHubClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    pub feed: Arc<FeedService<dyn GitHubClient>>,
    pub cv_path: PathBuf,
}

impl AppState {
    pub fn new(profile: Profile, github: Arc<dyn GitHubClient>, cv_path: PathBuf) -> Self {
        Self {
            profile: Arc::new(profile),
            feed: Arc::new(FeedService::new(github)),
            cv_path,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by the given GitHub client and a missing CV
    pub fn for_tests(profile: Profile, github: impl GitHubClient + 'static) -> Self {
        Self::new(
            profile,
            Arc::new(github),
            PathBuf::from("does-not-exist/cv.pdf"),
        )
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_page))
        .route("/projects", get(handlers::get_projects))
        .route("/health", get(health))
        .route_service("/cv.pdf", ServeFile::new(&state.cv_path))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio site...");

    // Load configuration
    let config = Config::from_env();
    let mut profile = Profile::load(config.profile_path.as_deref())
        .context("Failed to load profile")?;
    if let Some(handle) = &config.github_handle {
        profile = profile.with_github_username(handle);
    }

    // Create adapters and services; the feed itself loads per page view
    let github = Arc::new(GitHubClientImpl::new(config.github_api_url.clone()));
    let state = AppState::new(profile, github, config.cv_path.clone());

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
