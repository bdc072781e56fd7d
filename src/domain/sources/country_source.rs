//! Source trait for fetching country lists.

use async_trait::async_trait;
use url::Url;

use crate::domain::entities::Country;

/// User-facing message of every failed fetch.
pub const NETWORK_ERROR_MESSAGE: &str = "Network response not okay";

/// The one failure kind of a country fetch.
///
/// Covers non-success HTTP statuses, transport failures and undecodable
/// bodies alike. `Display` always yields [`NETWORK_ERROR_MESSAGE`]; the
/// underlying cause is kept in [`NetworkError::detail`] for logging only.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Network response not okay")]
pub struct NetworkError {
    detail: String,
}

impl NetworkError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Internal description of what went wrong.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Remote source of country lists.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::RestCountriesClient`] - REST Countries over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Issues one read-only request for `url` and returns the countries in
    /// the order received.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] when the request fails for any reason.
    /// Implementations must not retry.
    async fn load(&self, url: &Url) -> Result<Vec<Country>, NetworkError>;
}
