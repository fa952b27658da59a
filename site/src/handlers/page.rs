//! Page handlers
//!
//! Serves the portfolio page. Each request runs its own feed load and
//! renders once that load has settled.
//! Supports content negotiation: Accept: application/json for the page
//! model as JSON, otherwise rendered HTML.

use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::app::load_settled;
use crate::domain::entities::{LoadState, Profile};
use crate::error::AppError;
use crate::page::render_page;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Everything the page is rendered from
#[derive(Serialize)]
pub struct PageModel<'a> {
    pub profile: &'a Profile,
    pub projects: LoadState,
}

/// GET /
///
/// Returns the portfolio page rendered from this view's feed load.
/// - Accept: application/json → JSON page model
/// - Otherwise → HTML
pub async fn get_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.profile.github_username.clone();
    let projects = load_settled(state.feed.clone(), handle).await;

    if wants_json(&headers) {
        Json(PageModel {
            profile: &state.profile,
            projects,
        })
        .into_response()
    } else {
        Html(render_page(&state.profile, &projects, Utc::now().year())).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
