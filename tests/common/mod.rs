#![allow(dead_code)]

use async_trait::async_trait;
use country_explorer::application::services::CountryService;
use country_explorer::domain::entities::{Country, CountryName};
use country_explorer::domain::resolver::SourceResolver;
use country_explorer::domain::sources::{CountrySource, NetworkError};
use country_explorer::infrastructure::cache::{CachePolicy, NullCache};
use country_explorer::state::AppState;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Country source answering every request with the same canned result.
pub struct StubSource {
    response: Result<Vec<Country>, NetworkError>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn ok(countries: Vec<Country>) -> Self {
        Self {
            response: Ok(countries),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err(NetworkError::new("upstream returned 500 Internal Server Error")),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountrySource for StubSource {
    async fn load(&self, url: &Url) -> Result<Vec<Country>, NetworkError> {
        self.calls.lock().unwrap().push(url.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.clone()
    }
}

pub fn create_test_country(id: &str, common: &str, population: u64, capital: &[&str]) -> Country {
    Country {
        name: CountryName {
            common: common.to_string(),
            official: None,
        },
        id: id.to_string(),
        population,
        capital: capital.iter().map(|c| c.to_string()).collect(),
        region: "Europe".to_string(),
        flag_image_url: format!("https://flagcdn.com/{}.svg", id.to_lowercase()),
    }
}

pub fn create_test_service(source: Arc<dyn CountrySource>, api_base: &str) -> Arc<CountryService> {
    Arc::new(CountryService::new(
        SourceResolver::new(api_base).unwrap(),
        source,
        Arc::new(NullCache::new()),
        CachePolicy::default(),
    ))
}

pub fn create_test_state(source: Arc<StubSource>) -> AppState {
    create_test_state_with_wait(source, Duration::from_secs(2))
}

pub fn create_test_state_with_wait(source: Arc<StubSource>, render_wait: Duration) -> AppState {
    AppState::new(
        create_test_service(source, "https://restcountries.com"),
        render_wait,
    )
}
