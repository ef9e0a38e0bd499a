pub mod client;
pub mod error;
pub mod fetcher;
pub mod types;

pub use client::GeosearchClient;
pub use error::GeosearchError;
pub use fetcher::{LoadingState, NearbyPlacesFetcher};
pub use types::NearbyPage;
