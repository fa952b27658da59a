//! Project feed handler
//!
//! JSON view of the repository feed load state.

use axum::{extract::State, Json};

use crate::app::load_settled;
use crate::domain::entities::LoadState;
use crate::AppState;

/// GET /projects
///
/// Runs a feed load for this request and returns the settled state. A
/// failed load is still a 200: the state itself carries the error message.
pub async fn get_projects(State(state): State<AppState>) -> Json<LoadState> {
    let handle = state.profile.github_username.clone();
    Json(load_settled(state.feed.clone(), handle).await)
}
