//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and caches, then runs the Axum server until
//! Ctrl-C.

use crate::application::services::CountryService;
use crate::config::Config;
use crate::domain::resolver::SourceResolver;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::http::RestCountriesClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - REST Countries client
/// - Shared cache (Redis, or NullCache fallback)
/// - Country service with its outcome cache
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL or HTTP client cannot be set up
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let resolver =
        SourceResolver::new(&config.api_base_url).context("Invalid countries API URL")?;
    let client = RestCountriesClient::new(config.upstream_timeout())
        .context("Failed to build HTTP client")?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Shared cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Shared cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let country_service = Arc::new(CountryService::new(
        resolver,
        Arc::new(client),
        cache,
        config.cache_policy(),
    ));

    let state = AppState::new(country_service, config.render_wait());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
