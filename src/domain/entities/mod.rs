//! Domain entities for the country listing.

pub mod country;
pub mod outcome;
pub mod query;

pub use country::{Country, CountryName, NO_CAPITAL};
pub use outcome::FetchOutcome;
pub use query::CountryQuery;
