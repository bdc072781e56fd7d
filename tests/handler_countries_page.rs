mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{StubSource, create_test_country, create_test_state, create_test_state_with_wait};
use country_explorer::state::AppState;
use country_explorer::web::handlers::countries_handler;
use country_explorer::web::view::{NO_RESULTS_MESSAGE, UNAVAILABLE_MESSAGE};
use std::sync::Arc;
use std::time::Duration;

fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(countries_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_page_renders_cards_in_order() {
    let source = Arc::new(StubSource::ok(vec![
        create_test_country("DEU", "Germany", 83_240_525, &["Berlin"]),
        create_test_country("FRA", "France", 67_391_582, &["Paris"]),
    ]));
    let server = create_server(create_test_state(source));

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains(r#"href="/DEU""#));
    assert!(html.contains(r#"alt="Germany flag""#));
    assert!(html.contains(r#"src="https://flagcdn.com/deu.svg""#));
    assert!(html.contains("Population: 83,240,525"));
    assert!(html.contains("Region: Europe"));
    assert!(html.contains("Capital: Berlin"));

    let germany = html.find("Germany").unwrap();
    let france = html.find("France").unwrap();
    assert!(germany < france);
}

#[tokio::test]
async fn test_page_shows_placeholder_for_missing_capital() {
    let source = Arc::new(StubSource::ok(vec![create_test_country(
        "ATA",
        "Antarctica",
        1_000,
        &[],
    )]));
    let server = create_server(create_test_state(source));

    let html = server.get("/").await.text();

    assert!(html.contains("Capital: N/A"));
}

#[tokio::test]
async fn test_page_shows_error_instead_of_grid() {
    let source = Arc::new(StubSource::failing());
    let server = create_server(create_test_state(source));

    let response = server.get("/").add_query_param("region", "europe").await;

    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("Error: Network response not okay"));
    assert!(!html.contains(r#"class="grid""#));
    assert!(!html.contains("500 Internal Server Error"));
}

#[tokio::test]
async fn test_page_empty_result_with_search_is_no_results() {
    let source = Arc::new(StubSource::ok(vec![]));
    let server = create_server(create_test_state(source));

    let html = server.get("/").add_query_param("search", "zzz").await.text();

    assert!(html.contains(NO_RESULTS_MESSAGE));
    assert!(!html.contains(UNAVAILABLE_MESSAGE));
}

#[tokio::test]
async fn test_page_empty_result_without_filter_is_unavailable() {
    let source = Arc::new(StubSource::ok(vec![]));
    let server = create_server(create_test_state(source));

    let html = server.get("/").await.text();

    assert!(html.contains(UNAVAILABLE_MESSAGE));
    assert!(!html.contains(NO_RESULTS_MESSAGE));
}

#[tokio::test]
async fn test_page_search_takes_precedence_over_region() {
    let source = Arc::new(StubSource::ok(vec![]));
    let server = create_server(create_test_state(source.clone()));

    server
        .get("/")
        .add_query_param("region", "europe")
        .add_query_param("search", "france")
        .await
        .assert_status_ok();

    assert_eq!(
        source.calls(),
        vec!["https://restcountries.com/v3.1/name/france".to_string()]
    );
}

#[tokio::test]
async fn test_page_reuses_cached_outcome() {
    let source = Arc::new(StubSource::ok(vec![create_test_country(
        "ESP",
        "Spain",
        47_351_567,
        &["Madrid"],
    )]));
    let server = create_server(create_test_state(source.clone()));

    for _ in 0..3 {
        server
            .get("/")
            .add_query_param("region", "europe")
            .await
            .assert_status_ok();
    }

    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_page_shows_loading_while_fetch_in_flight() {
    let source = Arc::new(StubSource::ok(vec![]).with_delay(Duration::from_millis(500)));
    let server = create_server(create_test_state_with_wait(
        source,
        Duration::from_millis(10),
    ));

    let html = server.get("/").await.text();

    assert!(html.contains("Loading..."));
    assert!(html.contains(r#"http-equiv="refresh""#));
}

#[tokio::test]
async fn test_page_keeps_filters_in_form() {
    let source = Arc::new(StubSource::ok(vec![]));
    let server = create_server(create_test_state(source));

    let html = server
        .get("/")
        .add_query_param("region", "Europe")
        .await
        .text();
    assert!(html.contains(r#"<option value="europe" selected>"#));

    let html = server
        .get("/")
        .add_query_param("search", "peru")
        .await
        .text();
    assert!(html.contains(r#"value="peru""#));
}

#[tokio::test]
async fn test_page_escapes_search_value() {
    let source = Arc::new(StubSource::ok(vec![]));
    let server = create_server(create_test_state(source));

    let html = server
        .get("/")
        .add_query_param("search", "<script>")
        .await
        .text();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
