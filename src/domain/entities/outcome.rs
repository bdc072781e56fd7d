//! State of a country fetch.

use std::sync::Arc;

use super::Country;

/// Result of fetching a country list, as observed by a renderer.
///
/// Exactly one variant holds at a time. An entry starts as `Loading` and
/// moves to `Error` or `Success` once, when its network call settles.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loading,
    Error(String),
    Success(Arc<Vec<Country>>),
}

impl FetchOutcome {
    pub fn success(countries: Vec<Country>) -> Self {
        Self::Success(Arc::new(countries))
    }

    /// Returns true once the fetch has settled either way.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
