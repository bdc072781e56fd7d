//! # Country Explorer
//!
//! A server-rendered country browser backed by the
//! [REST Countries](https://restcountries.com) API, built with Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Country entities, query resolution and source traits
//! - **Application Layer** ([`application`]) - The listing pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and caches
//! - **API Layer** ([`api`]) - JSON listing and health endpoints
//! - **Web Layer** ([`web`]) - HTML listing page
//!
//! ## Features
//!
//! - Filter by region or search by name through `?region=` / `?search=`
//! - One upstream request per distinct query, shared by concurrent viewers
//! - Optional Redis cache shared across instances
//! - Rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export COUNTRIES_API_URL="https://restcountries.com"  # Optional
//! export REDIS_URL="redis://localhost:6379"              # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CountryService;
    pub use crate::domain::entities::{Country, CountryName, CountryQuery, FetchOutcome};
    pub use crate::domain::resolver::SourceResolver;
    pub use crate::domain::sources::{CountrySource, NetworkError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CachePolicy, NullCache};
    pub use crate::state::AppState;
}
