//! Feed loader
//!
//! Runs one feed load and publishes its lifecycle through a `watch`
//! channel. Consumers hold a `FeedSubscription`; once every subscription
//! has been dropped the load is abandoned and nothing more is published.
//!
//! Every page view starts its own load and holds its own subscription, so
//! nothing fetched outlives the request that asked for it.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::app::FeedService;
use crate::domain::entities::LoadState;
use crate::domain::ports::GitHubClient;

/// How a load attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// `Ready` or `Error` was published
    Published,
    /// Every subscriber went away first; nothing was published
    Cancelled,
}

/// A consumer's interest in the feed
#[derive(Clone)]
pub struct FeedSubscription {
    rx: watch::Receiver<LoadState>,
}

impl FeedSubscription {
    pub fn new(rx: watch::Receiver<LoadState>) -> Self {
        Self { rx }
    }

    /// Snapshot of the current state
    pub fn current(&self) -> LoadState {
        self.rx.borrow().clone()
    }

    /// Wait until the load leaves `Loading`.
    ///
    /// If the loader goes away without settling, the last published state
    /// is returned as-is.
    pub async fn settled(&mut self) -> LoadState {
        let settled = self
            .rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.current())
    }
}

/// Run one load attempt against `tx`.
///
/// Resets the state to `Loading`, awaits the fetch, and publishes
/// `Ready` or `Error`. Receivers closing at any point before publishing
/// abandons the attempt.
pub async fn drive_load<GC>(
    service: &FeedService<GC>,
    account_handle: &str,
    tx: &watch::Sender<LoadState>,
) -> LoadOutcome
where
    GC: GitHubClient + ?Sized,
{
    tx.send_if_modified(|state| {
        if state.is_loading() {
            false
        } else {
            *state = LoadState::Loading;
            true
        }
    });

    tracing::info!("Loading repository feed for {}", account_handle);

    let result = tokio::select! {
        biased;
        _ = tx.closed() => None,
        result = service.load_feed(account_handle) => Some(result),
    };

    let state = match result {
        Some(_) if tx.is_closed() => None,
        Some(Ok(items)) => Some(LoadState::Ready { items }),
        Some(Err(e)) => {
            tracing::warn!("Repository feed failed: {}", e);
            Some(LoadState::Error {
                message: e.to_string(),
            })
        }
        None => None,
    };

    match state {
        Some(state) => {
            tracing::info!(
                "Repository feed settled with {} items",
                state.items().len()
            );
            tx.send_replace(state);
            LoadOutcome::Published
        }
        None => {
            tracing::debug!("Repository feed load cancelled for {}", account_handle);
            LoadOutcome::Cancelled
        }
    }
}

/// Spawn a load on the runtime and hand back the first subscription
pub fn spawn_feed<GC>(
    service: Arc<FeedService<GC>>,
    account_handle: String,
) -> (FeedSubscription, JoinHandle<LoadOutcome>)
where
    GC: GitHubClient + ?Sized + 'static,
{
    let (tx, rx) = watch::channel(LoadState::Loading);
    let task = tokio::spawn(async move { drive_load(&service, &account_handle, &tx).await });
    (FeedSubscription::new(rx), task)
}

/// Load the feed for one consumer and wait for it to settle.
///
/// The caller holds the only subscription: dropping this future before it
/// resolves (a client disconnecting mid-request) abandons the fetch.
pub async fn load_settled<GC>(service: Arc<FeedService<GC>>, account_handle: String) -> LoadState
where
    GC: GitHubClient + ?Sized + 'static,
{
    let (mut subscription, _task) = spawn_feed(service, account_handle);
    subscription.settled().await
}
