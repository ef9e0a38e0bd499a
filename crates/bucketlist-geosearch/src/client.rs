//! HTTP client for the encyclopedia geosearch endpoint.
//!
//! Wraps `reqwest` with the fixed query shape for "pages near a coordinate"
//! and typed response decoding.

use std::time::Duration;

use bucketlist_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::GeosearchError;
use crate::types::{GeosearchResponse, NearbyPage};

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Search radius around the coordinate, in metres.
pub const SEARCH_RADIUS_M: u32 = 10_000;

/// Maximum number of pages returned per search.
pub const RESULT_LIMIT: u32 = 50;

/// Client for the geosearch endpoint.
///
/// Use [`GeosearchClient::new`] for production or
/// [`GeosearchClient::with_base_url`] to point at a mock server in tests.
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct GeosearchClient {
    client: Client,
    base_url: Url,
}

impl GeosearchClient {
    /// Creates a new client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeosearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeosearchError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeosearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeosearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeosearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| GeosearchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches pages near `coordinate`, ordered by title.
    ///
    /// # Errors
    ///
    /// - [`GeosearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeosearchError::Api`] if the body is an API error envelope.
    /// - [`GeosearchError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn nearby_pages(
        &self,
        coordinate: Coordinate,
    ) -> Result<Vec<NearbyPage>, GeosearchError> {
        let url = self.build_url(coordinate);
        tracing::debug!(%coordinate, "requesting nearby pages");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let context = || format!("geosearch({coordinate})");
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| GeosearchError::Deserialize {
                context: context(),
                source: e,
            })?;
        Self::check_api_error(&value)?;

        let parsed: GeosearchResponse =
            serde_json::from_value(value).map_err(|e| GeosearchError::Deserialize {
                context: context(),
                source: e,
            })?;

        let pages = parsed.into_pages();
        tracing::debug!(%coordinate, count = pages.len(), "received nearby pages");
        Ok(pages)
    }

    /// Surfaces `{"error": {"code": ..., "info": ...}}` bodies, which the API
    /// sends with a 200 status.
    fn check_api_error(body: &serde_json::Value) -> Result<(), GeosearchError> {
        let Some(error) = body.get("error") else {
            return Ok(());
        };
        let field = |key: &str| {
            error
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown")
                .to_string()
        };
        Err(GeosearchError::Api {
            code: field("code"),
            info: field("info"),
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, coordinate: Coordinate) -> Url {
        let mut url = self.base_url.clone();
        let coord = format!("{}|{}", coordinate.latitude, coordinate.longitude);
        let radius = SEARCH_RADIUS_M.to_string();
        let limit = RESULT_LIMIT.to_string();
        url.query_pairs_mut()
            .append_pair("ggscoord", &coord)
            .append_pair("action", "query")
            .append_pair("prop", "coordinates|pageimages|pageterms")
            .append_pair("colimit", &limit)
            .append_pair("piprop", "thumbnail")
            .append_pair("pithumbsize", "500")
            .append_pair("pilimit", &limit)
            .append_pair("wbptterms", "description")
            .append_pair("generator", "geosearch")
            .append_pair("ggsradius", &radius)
            .append_pair("ggslimit", &limit)
            .append_pair("format", "json");
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
