//! Application layer services.
//!
//! This layer orchestrates the listing pipeline: it resolves queries to
//! source URLs, schedules fetches through the outcome cache and hands settled
//! outcomes to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::country_service::CountryService`] - Query resolution, fetching and caching

pub mod services;
