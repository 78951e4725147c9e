//! Integration tests for the HTTP catalog client against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adoptme::catalog::{CatalogClient, HttpCatalogClient};
use adoptme::error::AppError;
use adoptme::models::{CatalogConfig, SearchQuery, Species};

fn client_for(server: &MockServer) -> HttpCatalogClient {
    let config = CatalogConfig {
        api_url: server.uri(),
        ..CatalogConfig::default()
    };
    HttpCatalogClient::new(&config).expect("client should build")
}

fn charlie() -> serde_json::Value {
    json!({
        "id": 42,
        "name": "Charlie",
        "type": "Dog",
        "breeds": { "primary": "Havanese" },
        "photos": [{ "small": "charlie-small.jpg" }],
        "contact": { "address": { "city": "Seattle", "state": "WA" } },
        "description": "A very good boy.",
        "url": "https://example.com/adopt/42",
        "published_at": "2026-05-01T12:00:00Z"
    })
}

#[tokio::test]
async fn list_breeds_returns_names_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breeds"))
        .and(query_param("species", "dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "breeds": [
                { "name": "Bichon Frise" },
                { "name": "Bolognese" },
                { "name": "Havanese" }
            ]
        })))
        .mount(&server)
        .await;

    let breeds = client_for(&server).list_breeds(Species::Dog).await.unwrap();
    assert_eq!(breeds, vec!["Bichon Frise", "Bolognese", "Havanese"]);
}

#[tokio::test]
async fn list_animals_sends_filters_and_maps_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animals"))
        .and(query_param("location", "Seattle, WA"))
        .and(query_param("species", "dog"))
        .and(query_param("breed", "Havanese"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "animals": [charlie()] })),
        )
        .mount(&server)
        .await;

    let query = SearchQuery {
        location: "Seattle, WA".into(),
        species: Species::Dog,
        breed: "Havanese".into(),
    };
    let animals = client_for(&server).list_animals(&query).await.unwrap();
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0].name, "Charlie");
    assert_eq!(animals[0].location(), "Seattle, WA");
}

#[tokio::test]
async fn get_animal_returns_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animals/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "animal": charlie() })))
        .mount(&server)
        .await;

    let animal = client_for(&server).get_animal(42).await.unwrap();
    assert_eq!(animal.adoption_url, "https://example.com/adopt/42");
    assert_eq!(animal.description, "A very good boy.");
}

#[tokio::test]
async fn missing_animal_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animals/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).get_animal(404).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn invalid_payload_maps_to_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_breeds(Species::Cat).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn record_missing_address_maps_to_malformed() {
    let server = MockServer::start().await;
    let mut record = charlie();
    record["contact"] = json!({});
    Mock::given(method("GET"))
        .and(path("/animals/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "animal": record })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_animal(42).await.unwrap_err();
    assert!(matches!(err, AppError::Malformed { .. }), "got {err:?}");
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animals"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_animals(&SearchQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Http(_)), "got {err:?}");
}
