//! Source interfaces for upstream data access.
//!
//! # Design
//!
//! - Traits use `async_trait` for async method support
//! - Implementations live in the infrastructure layer
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod country_source;

pub use country_source::{CountrySource, NETWORK_ERROR_MESSAGE, NetworkError};

#[cfg(test)]
pub use country_source::MockCountrySource;
