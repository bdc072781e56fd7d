//! Handler for the JSON country listing.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::countries::{CountriesResponse, CountryItem};
use crate::domain::entities::{CountryQuery, FetchOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// Lists countries for the given filters.
///
/// # Endpoint
///
/// `GET /api/countries`
///
/// # Query Parameters
///
/// - `region` (optional): Region name, e.g. `europe`
/// - `search` (optional): Country name search; takes precedence over `region`
///
/// # Response
///
/// Waits for the fetch to settle and returns the countries in upstream order.
/// Shares the outcome cache with the listing page.
///
/// # Errors
///
/// Returns 502 Bad Gateway if the upstream request failed.
pub async fn countries_handler(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<CountriesResponse>, AppError> {
    let entry = state.country_service.load(&query).await;

    let countries = match entry.outcome {
        FetchOutcome::Success(countries) => countries,
        FetchOutcome::Error(message) => {
            return Err(AppError::upstream(
                message,
                json!({ "region": query.region, "search": query.search }),
            ));
        }
        FetchOutcome::Loading => {
            return Err(AppError::upstream(
                "Countries are still loading",
                json!({ "region": query.region, "search": query.search }),
            ));
        }
    };

    let data: Vec<CountryItem> = countries.iter().map(CountryItem::from).collect();

    Ok(Json(CountriesResponse {
        status: "success",
        source: state.country_service.resolve(&query).to_string(),
        count: data.len(),
        fetched_at: entry.settled_at,
        query,
        data,
    }))
}
