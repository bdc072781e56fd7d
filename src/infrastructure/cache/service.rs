//! Shared response cache trait and error types.

use async_trait::async_trait;

use crate::domain::entities::Country;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching fetched country lists across service instances.
///
/// Sits behind the in-process [`crate::infrastructure::cache::OutcomeCache`]:
/// fetch tasks consult it before going to the network. Only successful
/// responses are stored. Implementations must be thread-safe and fail open;
/// a cache failure degrades to an upstream request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached country list.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(countries))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_countries(&self, key: &str) -> CacheResult<Option<Vec<Country>>>;

    /// Stores a country list with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `key` - Cache key, derived from the resolved source URL
    /// - `countries` - The list to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log errors
    /// and return `Ok(())` to avoid disrupting the fetch.
    async fn set_countries(
        &self,
        key: &str,
        countries: &[Country],
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Human-readable backend name for health reports.
    fn backend(&self) -> &'static str;
}

/// Builds the shared cache key for a resolved source URL.
pub fn countries_key(source_url: &str) -> String {
    format!("countries:{}", source_url)
}
