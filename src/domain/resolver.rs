//! Maps listing filters to a REST Countries endpoint.
//!
//! Precedence is `search > region > all`: a non-empty search always targets
//! the name endpoint, whatever the region says. The two filters are never
//! combined.

use url::Url;

use crate::domain::entities::CountryQuery;

/// API version prefix of every endpoint.
pub const API_VERSION: &str = "v3.1";

/// Errors raised when configuring the resolver's base URL.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("Invalid API base URL: {0}")]
    InvalidFormat(String),

    #[error("API base URL must use http or https")]
    UnsupportedProtocol,
}

/// Upstream endpoint selected for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    All,
    Region(&'a str),
    Name(&'a str),
}

impl<'a> Endpoint<'a> {
    /// Selects the endpoint for a query.
    pub fn for_query(query: &'a CountryQuery) -> Self {
        if !query.search.is_empty() {
            Self::Name(&query.search)
        } else if !query.region.is_empty() {
            Self::Region(&query.region)
        } else {
            Self::All
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Region(_) => "region",
            Self::Name(_) => "name",
        }
    }
}

/// Builds source URLs against a fixed API base.
///
/// `resolve` is a pure function of `(region, search)`, which is what makes
/// caching fetched outcomes by that pair safe.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    base: Url,
}

impl SourceResolver {
    /// Creates a resolver for the given API base (e.g. `https://restcountries.com`).
    ///
    /// Query and fragment of the base are dropped; a path prefix is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidFormat`] for malformed URLs and
    /// [`ResolverError::UnsupportedProtocol`] for non-HTTP(S) schemes.
    pub fn new(base: &str) -> Result<Self, ResolverError> {
        let mut base = Url::parse(base).map_err(|e| ResolverError::InvalidFormat(e.to_string()))?;

        match base.scheme() {
            "http" | "https" => {}
            _ => return Err(ResolverError::UnsupportedProtocol),
        }

        base.set_query(None);
        base.set_fragment(None);

        Ok(Self { base })
    }

    /// Resolves the source URL for a query.
    ///
    /// Filter values are pushed as single, percent-encoded path segments.
    pub fn resolve(&self, query: &CountryQuery) -> Url {
        let mut url = self.base.clone();

        // http(s) URLs always have a path, checked in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(API_VERSION);
            match Endpoint::for_query(query) {
                Endpoint::All => {
                    segments.push("all");
                }
                Endpoint::Region(region) => {
                    segments.push("region").push(region);
                }
                Endpoint::Name(search) => {
                    segments.push("name").push(search);
                }
            }
        }

        url
    }
}
