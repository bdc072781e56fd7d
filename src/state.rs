//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::CountryService;

#[derive(Clone)]
pub struct AppState {
    pub country_service: Arc<CountryService>,
    /// Longest time the listing page waits on an in-flight fetch.
    pub render_wait: Duration,
}

impl AppState {
    pub fn new(country_service: Arc<CountryService>, render_wait: Duration) -> Self {
        Self {
            country_service,
            render_wait,
        }
    }
}
