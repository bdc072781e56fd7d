//! Web layer for the browser-facing listing page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - Outcome-to-page render model

pub mod handlers;
pub mod routes;
pub mod view;
