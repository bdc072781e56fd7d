//! DTOs for the country listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Country, CountryQuery};

/// Successful country listing.
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub status: &'static str,
    pub query: CountryQuery,
    /// Upstream URL the listing was resolved to.
    pub source: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    pub data: Vec<CountryItem>,
}

/// A single country of the listing.
#[derive(Debug, Serialize)]
pub struct CountryItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    pub population: u64,
    pub region: String,
    /// First listed capital, `"N/A"` when there is none.
    pub capital: String,
    pub flag_url: String,
    pub detail_path: String,
}

impl From<&Country> for CountryItem {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id.clone(),
            name: country.name.common.clone(),
            official_name: country.name.official.clone(),
            population: country.population,
            region: country.region.clone(),
            capital: country.first_capital().to_string(),
            flag_url: country.flag_image_url.clone(),
            detail_path: country.detail_path(),
        }
    }
}
