//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::countries_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Country listing, filtered by `region` / `search` query parameters
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(countries_handler))
}
