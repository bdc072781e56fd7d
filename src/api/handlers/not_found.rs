//! Fallback for unknown API routes.

use axum::extract::OriginalUri;
use serde_json::json;

use crate::error::AppError;

/// Returns a JSON 404 for any unmatched `/api/*` path.
pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
