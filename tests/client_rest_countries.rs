//! Exercises the HTTP client and the full pipeline against a local
//! stand-in for the REST Countries API.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use common::create_test_service;
use country_explorer::domain::sources::{CountrySource, NETWORK_ERROR_MESSAGE};
use country_explorer::infrastructure::http::RestCountriesClient;
use country_explorer::state::AppState;
use country_explorer::web::handlers::countries_handler;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Starts a fake upstream and returns its base URL.
///
/// - `/v3.1/all` answers with two countries
/// - `/v3.1/name/{name}` always fails with 500
/// - `/v3.1/region/{region}` answers with a body that is not JSON
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/v3.1/all",
            get(|| async {
                Json(json!([
                    {
                        "name": {"common": "Iceland", "official": "Iceland"},
                        "cca3": "ISL",
                        "population": 366425,
                        "capital": ["Reykjavik"],
                        "region": "Europe",
                        "flags": {"svg": "https://flagcdn.com/is.svg"}
                    },
                    {
                        "name": {"common": "Bouvet Island"},
                        "cca3": "BVT",
                        "population": 0,
                        "region": "Antarctic",
                        "flags": {"svg": "https://flagcdn.com/bv.svg"}
                    }
                ]))
            }),
        )
        .route(
            "/v3.1/name/{name}",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/v3.1/region/{region}", get(|| async { "not json" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client() -> RestCountriesClient {
    RestCountriesClient::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_client_loads_countries() {
    let base = spawn_upstream().await;
    let url = Url::parse(&format!("{}/v3.1/all", base)).unwrap();

    let countries = client().load(&url).await.unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].id, "ISL");
    assert_eq!(countries[0].first_capital(), "Reykjavik");
    assert_eq!(countries[0].formatted_population(), "366,425");
    assert_eq!(countries[1].id, "BVT");
    assert!(countries[1].capital.is_empty());
}

#[tokio::test]
async fn test_client_rejects_error_status() {
    let base = spawn_upstream().await;
    let url = Url::parse(&format!("{}/v3.1/name/france", base)).unwrap();

    let err = client().load(&url).await.unwrap_err();

    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    assert!(err.detail().contains("500"));
}

#[tokio::test]
async fn test_client_rejects_undecodable_body() {
    let base = spawn_upstream().await;
    let url = Url::parse(&format!("{}/v3.1/region/europe", base)).unwrap();

    let err = client().load(&url).await.unwrap_err();

    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_client_reports_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/v3.1/all", addr)).unwrap();
    let err = client().load(&url).await.unwrap_err();

    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_page_against_failing_upstream() {
    let base = spawn_upstream().await;
    let service = create_test_service(Arc::new(client()), &base);
    let app = Router::new()
        .route("/", get(countries_handler))
        .with_state(AppState::new(service, Duration::from_secs(5)));
    let server = TestServer::new(app).unwrap();

    let html = server
        .get("/")
        .add_query_param("region", "europe")
        .add_query_param("search", "france")
        .await
        .text();

    assert!(html.contains("Error: Network response not okay"));
    assert!(!html.contains(r#"class="grid""#));
}

#[tokio::test]
async fn test_page_against_upstream_listing() {
    let base = spawn_upstream().await;
    let service = create_test_service(Arc::new(client()), &base);
    let app = Router::new()
        .route("/", get(countries_handler))
        .with_state(AppState::new(service, Duration::from_secs(5)));
    let server = TestServer::new(app).unwrap();

    let html = server.get("/").await.text();

    assert!(html.contains("Iceland"));
    assert!(html.contains("Capital: Reykjavik"));
    assert!(html.contains("Capital: N/A"));
    assert!(html.contains(r#"href="/BVT""#));
}
