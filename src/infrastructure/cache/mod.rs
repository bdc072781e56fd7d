//! Caching layer for fetched country lists.
//!
//! Two tiers:
//! - [`OutcomeCache`] - In-process outcomes keyed by listing query, with
//!   in-flight deduplication
//! - [`CacheService`] - Optional shared response cache behind it, with
//!   [`RedisCache`] for production and [`NullCache`] when disabled

mod null_cache;
mod outcome_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use outcome_cache::{CachePolicy, OutcomeCache, OutcomeEntry};
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService, countries_key};
