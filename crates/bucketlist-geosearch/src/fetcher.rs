//! Three-state loading of nearby pages for one edit session.

use bucketlist_core::Coordinate;
use tokio::sync::watch;

use crate::client::GeosearchClient;
use crate::types::NearbyPage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Loading,
    Loaded(Vec<NearbyPage>),
    Failed,
}

/// Runs a single nearby-pages fetch and publishes its progress.
///
/// An instance fetches at most once. Open a new fetcher for each edit
/// session; failures are not retried.
pub struct NearbyPlacesFetcher {
    client: GeosearchClient,
    state: watch::Sender<LoadingState>,
    started: bool,
}

impl NearbyPlacesFetcher {
    #[must_use]
    pub fn new(client: GeosearchClient) -> Self {
        let (state, _) = watch::channel(LoadingState::Loading);
        Self {
            client,
            state,
            started: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> LoadingState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.state.subscribe()
    }

    /// Fetches pages near `coordinate` and settles on `Loaded` or `Failed`.
    ///
    /// Calls after the first are ignored.
    pub async fn fetch_nearby(&mut self, coordinate: Coordinate) {
        if self.started {
            tracing::debug!(%coordinate, "nearby fetch already ran for this session");
            return;
        }
        self.started = true;
        self.state.send_replace(LoadingState::Loading);

        let next = match self.client.nearby_pages(coordinate).await {
            Ok(pages) => LoadingState::Loaded(pages),
            Err(e) => {
                tracing::warn!(%coordinate, error = %e, "nearby places fetch failed");
                LoadingState::Failed
            }
        };
        self.state.send_replace(next);
    }
}
