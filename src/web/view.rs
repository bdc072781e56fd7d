//! Render model of the country listing.
//!
//! [`ListingView::from_outcome`] is the single place that decides what the
//! page shows for a fetch outcome. Templates only lay the result out.

use crate::domain::entities::{Country, CountryQuery, FetchOutcome};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_RESULTS_MESSAGE: &str = "No countries found. Please adjust your filters.";
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch countries. Please try again later.";

/// Regions offered by the filter, as `(query value, label)`.
pub const REGIONS: [(&str, &str); 5] = [
    ("africa", "Africa"),
    ("americas", "Americas"),
    ("asia", "Asia"),
    ("europe", "Europe"),
    ("oceania", "Oceania"),
];

/// One card of the listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCard {
    pub href: String,
    pub flag_url: String,
    pub flag_alt: String,
    pub name: String,
    pub population: String,
    pub region: String,
    pub capital: String,
}

impl From<&Country> for CountryCard {
    fn from(country: &Country) -> Self {
        Self {
            href: country.detail_path(),
            flag_url: country.flag_image_url.clone(),
            flag_alt: format!("{} flag", country.name.common),
            name: country.name.common.clone(),
            population: country.formatted_population(),
            region: country.region.clone(),
            capital: country.first_capital().to_string(),
        }
    }
}

/// What the listing area of the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Error(String),
    /// Settled with no entries while a filter is active.
    NoResults,
    /// Settled with no entries and no filter.
    Unavailable,
    Cards(Vec<CountryCard>),
}

impl ListingView {
    /// Chooses the render path for an outcome. Cards keep the received order.
    pub fn from_outcome(outcome: &FetchOutcome, query: &CountryQuery) -> Self {
        match outcome {
            FetchOutcome::Loading => Self::Loading,
            FetchOutcome::Error(message) => Self::Error(message.clone()),
            FetchOutcome::Success(countries) if countries.is_empty() => {
                if query.is_filtered() {
                    Self::NoResults
                } else {
                    Self::Unavailable
                }
            }
            FetchOutcome::Success(countries) => {
                Self::Cards(countries.iter().map(CountryCard::from).collect())
            }
        }
    }

    /// Text shown in place of the grid, `None` when cards are shown.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE.to_string()),
            Self::Error(message) => Some(format!("Error: {}", message)),
            Self::NoResults => Some(NO_RESULTS_MESSAGE.to_string()),
            Self::Unavailable => Some(UNAVAILABLE_MESSAGE.to_string()),
            Self::Cards(_) => None,
        }
    }

    /// CSS modifier for the message block.
    pub fn status_class(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::NoResults | Self::Unavailable => "empty",
            Self::Cards(_) => "cards",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn into_cards(self) -> Vec<CountryCard> {
        match self {
            Self::Cards(cards) => cards,
            _ => Vec::new(),
        }
    }
}

/// An entry of the region filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Region filter entries with `current` preselected (case-insensitive).
pub fn region_options(current: &str) -> Vec<RegionOption> {
    REGIONS
        .iter()
        .map(|&(value, label)| RegionOption {
            value,
            label,
            selected: value.eq_ignore_ascii_case(current),
        })
        .collect()
}
