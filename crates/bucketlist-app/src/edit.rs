use bucketlist_core::Location;
use bucketlist_geosearch::{GeosearchClient, LoadingState, NearbyPlacesFetcher};
use tokio::sync::watch::Receiver;

/// Editable copy of one location plus its nearby-places lookup.
///
/// Each time the edit sheet opens, create a new session. It fetches nearby
/// pages once and yields the edited value from [`EditSession::finish`].
pub struct EditSession {
    location: Location,
    name: String,
    description: String,
    nearby: NearbyPlacesFetcher,
}

impl EditSession {
    #[must_use]
    pub fn new(location: Location, client: GeosearchClient) -> Self {
        Self {
            name: location.name.clone(),
            description: location.description.clone(),
            location,
            nearby: NearbyPlacesFetcher::new(client),
        }
    }

    /// The location as it was when the session opened.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Looks up pages near the location. Only the first call fetches.
    pub async fn load_nearby(&mut self) {
        self.nearby.fetch_nearby(self.location.coordinate()).await;
    }

    #[must_use]
    pub fn loading_state(&self) -> LoadingState {
        self.nearby.state()
    }

    #[must_use]
    pub fn subscribe_nearby(&self) -> Receiver<LoadingState> {
        self.nearby.subscribe()
    }

    /// The edited location, ready for [`crate::MapViewModel::update`].
    #[must_use]
    pub fn finish(&self) -> Location {
        self.location.with_details(&self.name, &self.description)
    }
}
