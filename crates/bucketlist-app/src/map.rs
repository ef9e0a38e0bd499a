use bucketlist_auth::{Alert, AuthenticationGate, AuthenticationOutcome, Authenticator, GateState};
use bucketlist_core::{Coordinate, Location, MapStyle};
use bucketlist_store::LocationStore;
use tokio::sync::watch::Receiver;

/// State behind the main map screen.
pub struct MapViewModel<A> {
    gate: AuthenticationGate<A>,
    store: LocationStore,
    selected_place: Option<Location>,
    map_style: MapStyle,
}

impl<A: Authenticator> MapViewModel<A> {
    pub fn new(authenticator: A, store: LocationStore) -> Self {
        Self {
            gate: AuthenticationGate::new(authenticator),
            store,
            selected_place: None,
            map_style: MapStyle::default(),
        }
    }

    /// Runs one unlock attempt. See [`AuthenticationGate::authenticate`].
    pub async fn unlock(&mut self) -> Option<AuthenticationOutcome> {
        self.gate.authenticate().await
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    #[must_use]
    pub fn pending_alert(&self) -> Option<Alert> {
        self.gate.pending_alert()
    }

    pub fn dismiss_alert(&mut self) {
        self.gate.dismiss_alert();
    }

    #[must_use]
    pub fn subscribe_gate(&self) -> Receiver<GateState> {
        self.gate.subscribe()
    }

    #[must_use]
    pub fn subscribe_locations(&self) -> Receiver<Vec<Location>> {
        self.store.subscribe()
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        self.store.locations()
    }

    /// Drops a new pin at `coordinate`, or returns `None` if the coordinate
    /// is invalid.
    pub fn add_location(&mut self, coordinate: Coordinate) -> Option<Location> {
        self.store.add(coordinate)
    }

    /// Marks `location` as the pin being edited.
    pub fn select(&mut self, location: Location) {
        tracing::debug!(id = %location.id, "selected location");
        self.selected_place = Some(location);
    }

    pub fn clear_selection(&mut self) {
        self.selected_place = None;
    }

    #[must_use]
    pub fn selected_place(&self) -> Option<&Location> {
        self.selected_place.as_ref()
    }

    /// Replaces the selected pin with `location` and closes the selection.
    ///
    /// Without a selection this does nothing and returns `false`.
    pub fn update(&mut self, location: Location) -> bool {
        let Some(selected) = self.selected_place.take() else {
            tracing::debug!("update without a selection; ignoring");
            return false;
        };
        self.store.update(&selected, location)
    }

    pub fn toggle_map_style(&mut self) -> MapStyle {
        self.map_style = self.map_style.toggled();
        self.map_style
    }

    #[must_use]
    pub fn map_style(&self) -> MapStyle {
        self.map_style
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
