//! Redis-backed shared response cache.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::Country;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Redis cache for fetched country lists.
///
/// Lists are stored as JSON strings. Uses `ConnectionManager` for connection
/// reuse. All operations are fail-open: errors are logged but don't
/// propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_countries`]
    ///   is called with `ttl_seconds = None`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_countries(&self, key: &str) -> CacheResult<Option<Vec<Country>>> {
        let mut conn = self.client.clone();

        let raw = match conn.get::<_, Option<String>>(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Redis GET error for {}: {}", key, e);
                return Ok(None);
            }
        };

        let Some(raw) = raw else {
            debug!("Shared cache MISS: {}", key);
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Country>>(&raw) {
            Ok(countries) => {
                debug!("Shared cache HIT: {} ({} countries)", key, countries.len());
                Ok(Some(countries))
            }
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set_countries(
        &self,
        key: &str,
        countries: &[Country],
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = serde_json::to_string(countries).map_err(|e| {
            CacheError::OperationError(format!("Failed to encode {}: {}", key, e))
        })?;

        let mut conn = self.client.clone();
        match conn.set_ex::<_, _, ()>(key, payload, ttl_seconds).await {
            Ok(_) => {
                debug!("Shared cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
