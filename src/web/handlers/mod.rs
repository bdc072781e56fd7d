//! HTML template rendering handlers.

mod countries;

pub use countries::{CountriesTemplate, countries_handler};
