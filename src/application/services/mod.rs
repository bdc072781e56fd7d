//! Business logic services for the application layer.

pub mod country_service;

pub use country_service::CountryService;
