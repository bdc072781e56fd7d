//! REST Countries API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::entities::{Country, CountryName};
use crate::domain::sources::{CountrySource, NetworkError};

/// Country object as returned by `/v3.1/*` endpoints.
///
/// Only the fields the listing shows are read; everything else in the
/// payload is ignored.
#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: NameRecord,
    cca3: String,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    region: String,
    #[serde(default)]
    flags: FlagsRecord,
}

#[derive(Debug, Deserialize)]
struct NameRecord {
    common: String,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FlagsRecord {
    #[serde(default)]
    svg: String,
}

impl From<CountryRecord> for Country {
    fn from(record: CountryRecord) -> Self {
        Self {
            name: CountryName {
                common: record.name.common,
                official: record.name.official,
            },
            id: record.cca3,
            population: record.population,
            capital: record.capital,
            region: record.region,
            flag_image_url: record.flags.svg,
        }
    }
}

/// HTTP implementation of [`CountrySource`] backed by `reqwest`.
///
/// One GET per call, bounded by the client's timeout. Never retries.
#[derive(Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
}

impl RestCountriesClient {
    /// Builds a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn load(&self, url: &Url) -> Result<Vec<Country>, NetworkError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| NetworkError::new(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::new(format!("upstream returned {}", status)));
        }

        let records: Vec<CountryRecord> = response
            .json()
            .await
            .map_err(|e| NetworkError::new(format!("invalid response body: {}", e)))?;

        Ok(records.into_iter().map(Country::from).collect())
    }
}
