//! Outbound HTTP integrations.

mod rest_countries;

pub use rest_countries::RestCountriesClient;
