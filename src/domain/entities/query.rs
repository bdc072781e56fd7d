//! Listing filters read from the page's query string.

use serde::{Deserialize, Serialize};

/// Region and free-text search filters of a listing request.
///
/// Both fields are empty when the parameter is absent. The pair is the
/// cache key for fetched outcomes: the resolved source URL depends on
/// nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryQuery {
    pub region: String,
    pub search: String,
}

impl CountryQuery {
    pub fn new(region: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            search: search.into(),
        }
    }

    /// Returns true if either filter is set.
    pub fn is_filtered(&self) -> bool {
        !self.region.is_empty() || !self.search.is_empty()
    }
}
