//! Geosearch API response types.
//!
//! Only the fields needed for nearby-page summaries are modelled. `query` and
//! `pages` are required, so any other body shape fails to decode.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// Shown when a page carries no short description.
pub const NO_DESCRIPTION: &str = "No further information";

/// Top-level response: `{ "query": { "pages": { ... } } }`.
#[derive(Debug, Deserialize)]
pub struct GeosearchResponse {
    pub query: Query,
}

/// Pages keyed by their numeric page id.
#[derive(Debug, Deserialize)]
pub struct Query {
    pub pages: BTreeMap<i64, Page>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub pageid: i64,
    pub title: String,
    /// Wikidata terms, e.g. `{"description": ["castle in Scotland"]}`.
    #[serde(default)]
    pub terms: Option<HashMap<String, Vec<String>>>,
}

/// One nearby point of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyPage {
    pub page_id: i64,
    pub title: String,
    pub description: Option<String>,
}

impl NearbyPage {
    /// The short description, or a fixed fallback when there is none.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

impl From<Page> for NearbyPage {
    fn from(page: Page) -> Self {
        let description = page
            .terms
            .and_then(|mut terms| terms.remove("description"))
            .and_then(|values| values.into_iter().next());
        Self {
            page_id: page.pageid,
            title: page.title,
            description,
        }
    }
}

impl GeosearchResponse {
    /// Flattens the page map into a list ordered by title, then page id.
    #[must_use]
    pub fn into_pages(self) -> Vec<NearbyPage> {
        let mut pages: Vec<NearbyPage> = self
            .query
            .pages
            .into_values()
            .map(NearbyPage::from)
            .collect();
        pages.sort_by(|a, b| a.title.cmp(&b.title).then(a.page_id.cmp(&b.page_id)));
        pages
    }
}
