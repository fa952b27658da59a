//! Stub GitHub server
//!
//! A tiny axum app on a loopback port that answers
//! `GET /users/:name/repos` the way GitHub would:
//! - `octo`: the `github_repos_json` fixture
//! - `limited`: 403 (anonymous rate limit)
//! - `garbled`: 200 with an object instead of a list
//! - anyone else: 404
//!
//! Requests without `per_page=100`, `sort=updated` and the GitHub JSON
//! media type are answered with 400 so callers notice a malformed request.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::fixtures::github_repos_json;

#[derive(Clone, Default)]
pub struct StubGitHub {
    requests: Arc<AtomicUsize>,
}

impl StubGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

async fn list_repos(
    State(stub): State<StubGitHub>,
    Path(name): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    stub.requests.fetch_add(1, Ordering::SeqCst);

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let well_formed = query.get("per_page").map(String::as_str) == Some("100")
        && query.get("sort").map(String::as_str) == Some("updated")
        && accept == "application/vnd.github+json"
        && headers.contains_key(header::USER_AGENT);
    if !well_formed {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match name.as_str() {
        "octo" => Json(github_repos_json()).into_response(),
        "limited" => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "message": "API rate limit exceeded" })),
        )
            .into_response(),
        "garbled" => Json(serde_json::json!({ "message": "not a list" })).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "Not Found" })),
        )
            .into_response(),
    }
}

/// Serve the stub on an ephemeral port and return its base URL
pub async fn spawn_stub_github(stub: StubGitHub) -> String {
    let app = Router::new()
        .route("/users/:name/repos", get(list_repos))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
