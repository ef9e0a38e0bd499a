use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name given to a freshly dropped pin until the user edits it.
pub const PLACEHOLDER_NAME: &str = "New location";

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite, with latitude in `[-90, 90]` and longitude in `[-180, 180]`.
    /// `NaN` fails both range checks.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// A saved point of interest.
///
/// Equality compares every field, not just `id`. The store relies on this
/// when it looks up the previously selected value to replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a location at `coordinate` with a fresh id, the placeholder
    /// name and an empty description.
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: PLACEHOLDER_NAME.to_string(),
            description: String::new(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Returns a copy carrying the edited text fields. Id and coordinate are
    /// kept as-is.
    #[must_use]
    pub fn with_details(&self, name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ..self.clone()
        }
    }
}

/// Base map rendering chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Standard,
    Hybrid,
}

impl MapStyle {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MapStyle::Standard => MapStyle::Hybrid,
            MapStyle::Hybrid => MapStyle::Standard,
        }
    }
}

impl std::fmt::Display for MapStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapStyle::Standard => write!(f, "standard"),
            MapStyle::Hybrid => write!(f, "hybrid"),
        }
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
