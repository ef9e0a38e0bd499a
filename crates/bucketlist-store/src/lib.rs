//! Durable storage for the saved-location collection.
//!
//! The whole collection lives in memory inside [`LocationStore`] and is
//! mirrored to a single JSON file that is rewritten atomically on every
//! mutation.

mod file;
mod store;

pub use store::LocationStore;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
