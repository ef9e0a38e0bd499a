use std::path::{Path, PathBuf};

use bucketlist_core::{Coordinate, Location};
use tokio::sync::watch;

use crate::{file, StoreError};

/// Single source of truth for saved locations.
///
/// Every mutation takes `&mut self` and rewrites the file before returning,
/// so writes reach disk in the order they were made. Observers get a fresh
/// snapshot through [`LocationStore::subscribe`] after each change.
pub struct LocationStore {
    path: PathBuf,
    locations: Vec<Location>,
    changes: watch::Sender<Vec<Location>>,
}

impl LocationStore {
    /// Opens the store backed by `path`, loading whatever is there.
    ///
    /// A missing or unreadable file yields an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let locations = load(&path);
        let (changes, _) = watch::channel(locations.clone());
        Self {
            path,
            locations,
            changes,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved locations in creation order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Location>> {
        self.changes.subscribe()
    }

    /// Appends a new location at `coordinate` and persists the collection.
    ///
    /// Returns `None` and leaves the collection untouched when `coordinate`
    /// is non-finite or out of range.
    pub fn add(&mut self, coordinate: Coordinate) -> Option<Location> {
        if !coordinate.is_valid() {
            tracing::warn!(?coordinate, "refusing to add location with invalid coordinate");
            return None;
        }
        let location = Location::new(coordinate);
        tracing::info!(id = %location.id, %coordinate, "adding location");
        self.locations.push(location.clone());
        self.publish();
        self.save();
        Some(location)
    }

    /// Replaces the first location equal to `selected` with `location`,
    /// keeping its position.
    ///
    /// Matching uses full value equality, so a stale selection (one edited
    /// since it was picked) matches nothing. Returns `false` without touching
    /// disk in that case, or when `location` has an invalid coordinate.
    pub fn update(&mut self, selected: &Location, location: Location) -> bool {
        if !location.coordinate().is_valid() {
            tracing::warn!(id = %location.id, "refusing update with invalid coordinate");
            return false;
        }
        let Some(index) = self.locations.iter().position(|l| l == selected) else {
            tracing::debug!(id = %selected.id, "update target not found; ignoring");
            return false;
        };

        tracing::info!(id = %location.id, index, "updating location");
        self.locations[index] = location;
        self.publish();
        self.save();
        true
    }

    /// Persists the collection, logging any failure instead of returning it.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::error!(error = %e, "unable to save locations");
        }
    }

    /// Serialises the collection and writes it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Json`] if serialisation fails or
    /// [`StoreError::Io`] if the file cannot be written.
    pub fn try_save(&self) -> Result<(), StoreError> {
        let data = serde_json::to_vec(&self.locations).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        file::write_atomic(&self.path, &data)?;
        tracing::debug!(
            path = %self.path.display(),
            count = self.locations.len(),
            "saved locations"
        );
        Ok(())
    }

    fn publish(&self) {
        self.changes.send_replace(self.locations.clone());
    }
}

/// Reads and decodes the collection, falling back to empty on any failure.
fn load(path: &Path) -> Vec<Location> {
    match try_load(path) {
        Ok(locations) => {
            tracing::debug!(path = %path.display(), count = locations.len(), "loaded locations");
            locations
        }
        Err(StoreError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved locations yet");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load saved locations; starting empty");
            Vec::new()
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<Location>, StoreError> {
    let data = file::read(path)?;
    serde_json::from_slice(&data).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
