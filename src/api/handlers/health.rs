//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Outcome cache**: Reports the number of tracked query outcomes
/// 2. **Shared cache**: Tests the backend (Redis PING, or disabled)
///
/// The upstream country API is not checked here; its failures surface per request.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "outcome_cache": {
///       "status": "ok",
///       "message": "Tracking 3 outcomes"
///     },
///     "shared_cache": {
///       "status": "ok",
///       "message": "Backend: redis"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let outcome_check = check_outcome_cache(&state);

    let shared_check = check_shared_cache(&state).await;

    let all_healthy = outcome_check.status == "ok" && shared_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            outcome_cache: outcome_check,
            shared_cache: shared_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports the in-process outcome cache size.
fn check_outcome_cache(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "Tracking {} outcomes",
            state.country_service.tracked_outcomes()
        )),
    }
}

/// Checks the shared cache backend.
async fn check_shared_cache(state: &AppState) -> CheckStatus {
    let backend = state.country_service.cache_backend();

    if state.country_service.cache_healthy().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Backend: {}", backend)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Backend {} is unreachable", backend)),
        }
    }
}
