//! Feed load state
//!
//! The tri-state lifecycle that drives what the project section shows.
//! Exactly one variant is active at a time; a load attempt moves it from
//! `Loading` to either `Error` or `Ready` once.

use serde::{Deserialize, Serialize};

use super::RepositorySummary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Loading,
    Error { message: String },
    Ready { items: Vec<RepositorySummary> },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Items to render; empty unless the state is `Ready`
    pub fn items(&self) -> &[RepositorySummary] {
        match self {
            LoadState::Ready { items } => items,
            _ => &[],
        }
    }
}
