use thiserror::Error;

/// Errors returned by the geosearch client.
#[derive(Debug, Error)]
pub enum GeosearchError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The endpoint answered 200 with an `{"error": {...}}` envelope.
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
