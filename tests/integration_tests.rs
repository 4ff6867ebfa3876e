//! Integration tests using mock HTTP server
//!
//! Tests the full flow: browser events → feed → catalog client → HTTP

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tcg_feed::config::CatalogConfig;
use tcg_feed::feed::{Alert, FeedStatus};
use tcg_feed::{CardBrowser, CardGateway, CatalogClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn card(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Card {id}"),
        "supertype": "Pokémon",
        "hp": "60",
        "rarity": "Common",
        "images": {
            "small": format!("https://images.pokemontcg.io/{id}.png"),
            "large": format!("https://images.pokemontcg.io/{id}_hires.png")
        },
        "legalities": {"unlimited": "Legal"}
    })
}

fn page_body(page: u32, count: usize, total: u32) -> Value {
    let data: Vec<Value> = (0..count).map(|i| card(&format!("p{page}-{i}"))).collect();
    json!({
        "data": data,
        "page": page,
        "pageSize": 15,
        "count": count,
        "totalCount": total
    })
}

async fn mount_page(server: &MockServer, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v2/cards"))
        .and(query_param("page", page.to_string()))
        .and(query_param("pageSize", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> CatalogClient {
    let config = CatalogConfig::builder().base_url(server.uri()).build();
    CatalogClient::with_config(&config).unwrap()
}

// ============================================================================
// Browser Scenarios
// ============================================================================

#[tokio::test]
async fn test_initial_load_of_fifteen_cards() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(1, 15, 25)).await;

    let mut browser = CardBrowser::new(client_for(&server));
    browser.on_appear().await;

    let state = browser.state();
    assert_eq!(state.card_count(), 15);
    assert_eq!(state.status(), FeedStatus::Loaded);
    assert_eq!(state.pending_alert(), Some(&Alert::success()));
}

#[tokio::test]
async fn test_pagination_to_second_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(1, 15, 25)).await;
    mount_page(&server, 2, page_body(2, 10, 25)).await;

    let mut browser = CardBrowser::new(client_for(&server));
    browser.on_appear().await;
    let first_page = browser.state().cards().unwrap().to_vec();
    browser.on_alert_dismissed();

    browser.on_list_end().await;

    let state = browser.state();
    let cards = state.cards().unwrap();
    assert_eq!(cards.len(), 25);
    assert_eq!(&cards[..15], first_page.as_slice());
    assert_eq!(cards[24].id, "p2-9");
    assert!(state.pending_alert().is_none());
    assert_eq!(state.alert(), Some(&Alert::success()));
}

#[tokio::test]
async fn test_initial_load_transport_failure() {
    // Port 9 (discard) has no listener on loopback
    let config = CatalogConfig::builder()
        .base_url("http://127.0.0.1:9")
        .build();
    let mut browser = CardBrowser::new(CatalogClient::with_config(&config).unwrap());

    browser.on_appear().await;

    let state = browser.state();
    assert!(state.cards().is_none());
    assert_eq!(state.status(), FeedStatus::Error);
    let alert = state.pending_alert().unwrap();
    assert_eq!(alert.title, "Error!");
    assert!(!alert.message.is_empty());
}

#[tokio::test]
async fn test_refresh_replaces_with_current_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/cards"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 15, 30)))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut refreshed = page_body(1, 3, 30);
    refreshed["data"][0]["name"] = json!("Refreshed");
    mount_page(&server, 1, refreshed).await;

    let mut browser = CardBrowser::new(client_for(&server));
    browser.on_appear().await;
    assert_eq!(browser.state().card_count(), 15);

    browser.on_refresh().await;

    let cards = browser.state().cards().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].name, "Refreshed");
}

#[tokio::test]
async fn test_server_error_on_pagination_keeps_list() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(1, 15, 100)).await;

    Mock::given(method("GET"))
        .and(path("/v2/cards"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let mut browser = CardBrowser::new(client_for(&server));
    browser.on_appear().await;
    let before = browser.state().cards().unwrap().to_vec();

    browser.on_list_end().await;

    let state = browser.state();
    assert_eq!(state.cards().unwrap(), before.as_slice());
    assert_eq!(
        state.pending_alert(),
        Some(&Alert::error("HTTP 503: Service Unavailable"))
    );
}

#[tokio::test]
async fn test_detail_selection_uses_decoded_fields() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(1, 2, 2)).await;

    let mut browser = CardBrowser::new(client_for(&server));
    browser.on_appear().await;

    let card = browser.select("p1-1").unwrap();
    assert_eq!(card.hp.as_deref(), Some("60"));
    assert_eq!(card.level, None);
    assert_eq!(
        card.small_image_url(),
        Some("https://images.pokemontcg.io/p1-1.png")
    );
}

// ============================================================================
// Gateway
// ============================================================================

#[tokio::test]
async fn test_gateway_decode_mismatch_is_fetch_error() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!({"cards": []})).await;

    let err = client_for(&server).fetch_page(1).await.unwrap_err();
    assert!(err.message().starts_with("Failed to decode response"));
}
