//! Domain layer containing the listing's entities and rules.
//!
//! Independent of HTTP, templates and caching.
//!
//! # Architecture
//!
//! - [`entities`] - Country, listing query and fetch outcome
//! - [`resolver`] - Query-to-endpoint resolution
//! - [`sources`] - Upstream source trait definitions
//!
//! # Listing Flow
//!
//! 1. The page's query string becomes an [`entities::CountryQuery`]
//! 2. [`resolver::SourceResolver`] turns it into a source URL
//! 3. A [`sources::CountrySource`] loads the URL, settling a [`entities::FetchOutcome`]
//! 4. The web layer renders the outcome (see [`crate::web::view`])

pub mod entities;
pub mod resolver;
pub mod sources;
