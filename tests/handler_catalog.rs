mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use offer_link_resolver::api::handlers::{catalog_handler, replace_catalog_handler};
use offer_link_resolver::domain::entities::InboundLink;
use offer_link_resolver::domain::repositories::GiftCardCatalog;
use offer_link_resolver::state::AppState;
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route(
            "/api/catalog",
            get(catalog_handler).put(replace_catalog_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_get_catalog() {
    let server = server(common::create_test_state());

    let response = server.get("/api/catalog").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 3);
    assert_eq!(json["cards"][0]["name"], "Amazon");
    assert_eq!(json["cards"][0]["minAmount"], 1.0);
    assert!(json["cards"][1].get("displayName").is_none());
    assert!(json.get("refreshed_at").is_some());
}

#[tokio::test]
async fn test_replace_catalog_success() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .put("/api/catalog")
        .json(&json!({
            "cards": [
                { "name": "Starbucks", "currency": "USD", "minAmount": 5, "maxAmount": 500 },
                { "name": "Zalando", "currency": "EUR", "website": "https://zalando.de" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 2);
    assert_eq!(json["cards"][1]["currency"], "EUR");

    let after = server.get("/api/catalog").await;
    let json = after.json::<serde_json::Value>();
    assert_eq!(json["count"], 2);
    assert_eq!(json["cards"][0]["name"], "Starbucks");

    let snapshot = state.catalog.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 2);
}

#[tokio::test]
async fn test_replace_catalog_invalid_currency() {
    let server = server(common::create_test_state());

    let response = server
        .put("/api/catalog")
        .json(&json!({ "cards": [{ "name": "Amazon", "currency": "usd" }] }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_replace_catalog_min_above_max() {
    let server = server(common::create_test_state());

    let response = server
        .put("/api/catalog")
        .json(&json!({
            "cards": [{ "name": "Amazon", "currency": "USD", "minAmount": 100, "maxAmount": 10 }]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_replace_catalog_duplicate_names() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .put("/api/catalog")
        .json(&json!({
            "cards": [
                { "name": "Amazon", "currency": "USD" },
                { "name": "AMAZON", "currency": "EUR" }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let snapshot = state.catalog.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 3);
}

#[tokio::test]
async fn test_replace_read_only_catalog() {
    let server = server(common::create_empty_state());

    let response = server
        .put("/api/catalog")
        .json(&json!({ "cards": [{ "name": "Amazon", "currency": "USD" }] }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_replaced_catalog_drives_resolution() {
    let state = common::create_test_state();
    let server = server(state.clone());

    server
        .put("/api/catalog")
        .json(&json!({ "cards": [{ "name": "Starbucks", "currency": "USD" }] }))
        .await
        .assert_status_ok();

    let snapshot = state.catalog.snapshot().await.unwrap();
    let resolution = state.resolver.resolve(
        &InboundLink::new("app://open/giftcard?merchant=starbucks", false),
        &snapshot.cards,
    );

    assert_eq!(resolution.outcome.kind(), "navigate_to_domain");
}
