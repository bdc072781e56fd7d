//! Country listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use crate::domain::entities::CountryQuery;
use crate::state::AppState;
use crate::web::view::{CountryCard, ListingView, RegionOption, region_options};

/// Template for the country listing page.
///
/// Renders `templates/countries.html`: search form, region filter and either
/// the card grid or a single status message.
#[derive(Template, WebTemplate)]
#[template(path = "countries.html")]
pub struct CountriesTemplate {
    pub search: String,
    pub regions: Vec<RegionOption>,
    pub message: String,
    pub status_class: &'static str,
    pub cards: Vec<CountryCard>,
    /// Asks the browser to reload while the fetch is still in flight.
    pub refresh: bool,
}

impl CountriesTemplate {
    pub fn new(query: &CountryQuery, view: ListingView) -> Self {
        let message = view.message().unwrap_or_default();
        let status_class = view.status_class();
        let refresh = view.is_loading();

        Self {
            search: query.search.clone(),
            regions: region_options(&query.region),
            message,
            status_class,
            cards: view.into_cards(),
            refresh,
        }
    }
}

/// Renders the country listing.
///
/// # Endpoint
///
/// `GET /?region={region}&search={search}`
///
/// Both parameters are optional; `search` takes precedence over `region`.
///
/// # Render Flow
///
/// 1. Look up (or schedule) the outcome for the query
/// 2. Wait up to the configured render wait for it to settle
/// 3. Render the settled outcome, or the loading state with a self-refresh
pub async fn countries_handler(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> impl IntoResponse {
    let outcome = state
        .country_service
        .load_within(&query, state.render_wait)
        .await;

    CountriesTemplate::new(&query, ListingView::from_outcome(&outcome, &query))
}
