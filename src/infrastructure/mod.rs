//! Infrastructure layer for external integrations.
//!
//! Implements the source interfaces defined by the domain layer and the
//! caches sitting in front of them.
//!
//! # Modules
//!
//! - [`cache`] - Outcome cache and shared response cache (Redis and no-op)
//! - [`http`] - REST Countries API client

pub mod cache;
pub mod http;
