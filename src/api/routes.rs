//! API route configuration.

use crate::api::handlers::{countries_handler, not_found_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public JSON API routes.
///
/// # Endpoints
///
/// - `GET /countries` - Country listing, filtered by `region` / `search`
///
/// Unmatched paths answer with a JSON 404.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(countries_handler))
        .fallback(not_found_handler)
}
