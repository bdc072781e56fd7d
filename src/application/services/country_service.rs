//! Country listing service.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tokio::sync::watch;
use tracing::{error, info, warn};
use url::Url;

use crate::domain::entities::{CountryQuery, FetchOutcome};
use crate::domain::resolver::{Endpoint, SourceResolver};
use crate::domain::sources::{CountrySource, NETWORK_ERROR_MESSAGE};
use crate::infrastructure::cache::{
    CachePolicy, CacheService, OutcomeCache, OutcomeEntry, countries_key,
};

/// Service resolving listing queries to fetch outcomes.
///
/// Owns the outcome cache: every read goes through it, so identical queries
/// share one in-flight fetch and reuse fresh results.
pub struct CountryService {
    resolver: SourceResolver,
    source: Arc<dyn CountrySource>,
    cache: Arc<dyn CacheService>,
    outcomes: OutcomeCache,
}

impl CountryService {
    /// Creates a new country service.
    pub fn new(
        resolver: SourceResolver,
        source: Arc<dyn CountrySource>,
        cache: Arc<dyn CacheService>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            resolver,
            source,
            cache,
            outcomes: OutcomeCache::new(policy),
        }
    }

    /// Returns the source URL for a query.
    pub fn resolve(&self, query: &CountryQuery) -> Url {
        self.resolver.resolve(query)
    }

    /// Returns the current outcome for a query without waiting.
    ///
    /// Schedules a fetch if the query has no usable entry, in which case the
    /// result is [`FetchOutcome::Loading`].
    pub fn current(&self, query: &CountryQuery) -> FetchOutcome {
        self.request(query).borrow().outcome.clone()
    }

    /// Waits until the outcome for a query has settled.
    pub async fn load(&self, query: &CountryQuery) -> OutcomeEntry {
        let mut rx = self.request(query);
        settled(&mut rx).await
    }

    /// Waits at most `wait` for the outcome of a query.
    ///
    /// Returns [`FetchOutcome::Loading`] if the fetch is still in flight when
    /// the time is up. The fetch itself keeps running.
    pub async fn load_within(&self, query: &CountryQuery, wait: Duration) -> FetchOutcome {
        let mut rx = self.request(query);

        match tokio::time::timeout(wait, settled(&mut rx)).await {
            Ok(entry) => entry.outcome,
            Err(_) => FetchOutcome::Loading,
        }
    }

    /// Number of outcome entries currently tracked.
    pub fn tracked_outcomes(&self) -> usize {
        self.outcomes.len()
    }

    /// Backend name of the shared response cache.
    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }

    /// Checks the shared response cache backend.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }

    fn request(&self, query: &CountryQuery) -> watch::Receiver<OutcomeEntry> {
        let url = self.resolver.resolve(query);
        let endpoint = Endpoint::for_query(query).kind();
        let source = self.source.clone();
        let cache = self.cache.clone();

        self.outcomes
            .get_or_schedule(query, move || fetch_outcome(source, cache, url, endpoint))
    }
}

async fn settled(rx: &mut watch::Receiver<OutcomeEntry>) -> OutcomeEntry {
    if let Ok(entry) = rx.wait_for(|entry| entry.outcome.is_settled()).await {
        return entry.clone();
    }

    // every sender is gone without a settled value
    error!("Outcome channel closed before the fetch settled");
    let mut entry = rx.borrow().clone();
    entry.outcome = FetchOutcome::Error(NETWORK_ERROR_MESSAGE.to_string());
    entry
}

/// Resolves one fetch: shared cache first, then a single upstream request.
async fn fetch_outcome(
    source: Arc<dyn CountrySource>,
    cache: Arc<dyn CacheService>,
    url: Url,
    endpoint: &'static str,
) -> FetchOutcome {
    let key = countries_key(url.as_str());

    match cache.get_countries(&key).await {
        Ok(Some(countries)) => {
            counter!("countries_shared_cache_hits_total", "endpoint" => endpoint).increment(1);
            return FetchOutcome::success(countries);
        }
        Ok(None) => {}
        Err(e) => warn!("Shared cache error: {}", e),
    }

    counter!("countries_upstream_requests_total", "endpoint" => endpoint).increment(1);

    match source.load(&url).await {
        Ok(countries) => {
            info!(endpoint, "Fetched {} countries from {}", countries.len(), url);
            if let Err(e) = cache.set_countries(&key, &countries, None).await {
                warn!("Failed to cache {}: {}", key, e);
            }
            FetchOutcome::success(countries)
        }
        Err(e) => {
            counter!("countries_upstream_failures_total", "endpoint" => endpoint).increment(1);
            error!(endpoint, "Fetch from {} failed: {}", url, e.detail());
            FetchOutcome::Error(e.to_string())
        }
    }
}
