//! In-process cache of fetch outcomes keyed by listing query.
//!
//! Each entry is a `watch` channel: it is created holding
//! [`FetchOutcome::Loading`], a spawned task resolves the fetch once and
//! publishes the settled outcome, and every caller asking for the same key
//! in the meantime subscribes to the same channel instead of starting
//! another fetch.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::entities::{CountryQuery, FetchOutcome};
use crate::domain::sources::NETWORK_ERROR_MESSAGE;

/// Outcome of one entry together with the time it settled.
#[derive(Debug, Clone)]
pub struct OutcomeEntry {
    pub outcome: FetchOutcome,
    /// When the fetch behind this entry was scheduled.
    pub started_at: DateTime<Utc>,
    /// `None` while the fetch is in flight.
    pub settled_at: Option<DateTime<Utc>>,
}

impl OutcomeEntry {
    fn loading(started_at: DateTime<Utc>) -> Self {
        Self {
            outcome: FetchOutcome::Loading,
            started_at,
            settled_at: None,
        }
    }
}

/// How long entries stay reusable.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    pub success_ttl: Duration,
    pub error_ttl: Duration,
    /// Longest time an unsettled entry is waited on before a new fetch
    /// replaces it.
    pub in_flight_ttl: Duration,
}

impl CachePolicy {
    /// Returns true if `entry` may still be served at `now`.
    fn is_usable(&self, entry: &OutcomeEntry, now: DateTime<Utc>) -> bool {
        let (since, ttl) = match (&entry.outcome, entry.settled_at) {
            (FetchOutcome::Error(_), Some(settled_at)) => (settled_at, self.error_ttl),
            (_, Some(settled_at)) => (settled_at, self.success_ttl),
            (_, None) => (entry.started_at, self.in_flight_ttl),
        };

        // a timestamp ahead of `now` counts as age zero
        let age = now.signed_duration_since(since).to_std().unwrap_or_default();

        age < ttl
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            success_ttl: Duration::from_secs(300),
            error_ttl: Duration::from_secs(5),
            in_flight_ttl: Duration::from_secs(10),
        }
    }
}

/// Publishes the outcome of one fetch task.
///
/// A task that ends without calling [`SettleGuard::settle`] (it panicked or
/// was aborted) settles its entry as a network error on drop, so waiters are
/// released and the key can be fetched again once the error TTL runs out.
struct SettleGuard {
    slot: Option<Slot>,
}

impl SettleGuard {
    fn settle(mut self, outcome: FetchOutcome) {
        if let Some(slot) = self.slot.take() {
            publish(&slot, outcome);
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            warn!("Fetch task ended without an outcome");
            publish(&slot, FetchOutcome::Error(NETWORK_ERROR_MESSAGE.to_string()));
        }
    }
}

fn publish(slot: &Slot, outcome: FetchOutcome) {
    slot.send_modify(|entry| {
        entry.outcome = outcome;
        entry.settled_at = Some(Utc::now());
    });
}

type Slot = Arc<watch::Sender<OutcomeEntry>>;

/// Outcome cache with in-flight deduplication.
///
/// At most one fetch per key is waited on at a time. A stale entry, settled
/// or stuck in flight past [`CachePolicy::in_flight_ttl`], is replaced by a
/// fresh one on the next request; the superseded fetch, if still running,
/// settles into its orphaned channel and is dropped.
pub struct OutcomeCache {
    entries: Mutex<HashMap<CountryQuery, Slot>>,
    policy: CachePolicy,
}

impl OutcomeCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            policy,
        }
    }

    /// Returns a receiver for the entry of `key`, scheduling `fetch` if there
    /// is no usable entry.
    ///
    /// `fetch` is only called when a new entry is created. Its future runs on
    /// a spawned task, so this must be called from within a Tokio runtime.
    pub fn get_or_schedule<F, Fut>(&self, key: &CountryQuery, fetch: F) -> watch::Receiver<OutcomeEntry>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        let now = Utc::now();
        let mut entries = self.lock();

        if let Some(slot) = entries.get(key)
            && self.policy.is_usable(&slot.borrow(), now)
        {
            debug!("Outcome cache HIT: {:?}", key);
            return slot.subscribe();
        }

        debug!("Outcome cache MISS: {:?}", key);

        // expired entries go when a new one comes in
        entries.retain(|_, slot| self.policy.is_usable(&slot.borrow(), now));

        let (tx, rx) = watch::channel(OutcomeEntry::loading(now));
        let tx = Arc::new(tx);
        entries.insert(key.clone(), tx.clone());
        drop(entries);

        let guard = SettleGuard { slot: Some(tx) };
        let pending = fetch();
        tokio::spawn(async move {
            let outcome = pending.await;
            guard.settle(outcome);
        });

        rx
    }

    /// Returns the current outcome of `key` without scheduling anything.
    pub fn peek(&self, key: &CountryQuery) -> Option<FetchOutcome> {
        self.lock()
            .get(key)
            .map(|slot| slot.borrow().outcome.clone())
    }

    /// Number of tracked entries, in flight or settled.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CountryQuery, Slot>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
