//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Country listing page (`?region=` / `?search=`)
//! - `GET  /api/countries` - JSON country listing
//! - `GET  /health`        - Health check: outcome cache, shared cache
//! - `/static/*`           - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the page and API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let limited = Router::new()
        .merge(web::routes::public_routes())
        .nest("/api", api::routes::public_routes())
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(limited)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
