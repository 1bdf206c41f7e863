//! Integration tests for the icon table and layout projection endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json, MemoryBackend};
use serde_json::json;

fn app() -> axum::Router {
    common::build_test_app(Arc::new(MemoryBackend::default()))
}

#[tokio::test]
async fn lists_icons_of_one_kind() {
    let json = body_json(get(app(), "/api/v1/icons?kind=genre").await).await;
    let icons = json["data"].as_array().unwrap();

    assert!(!icons.is_empty());
    assert!(icons.iter().all(|icon| icon["kind"] == "genre"));
    assert!(icons.iter().any(|icon| icon["id"] == "hip_hop"));
}

#[tokio::test]
async fn unknown_kind_is_rejected() {
    let response = get(app(), "/api/v1/icons?kind=kazoo").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resolves_free_text_to_glyph() {
    let json = body_json(get(app(), "/api/v1/icons/resolve?name=Electric%20Guitar&kind=instrument").await).await;

    assert_eq!(json["data"]["display"], "🎸");
    assert_eq!(json["data"]["id"], "electric_guitar");
}

#[tokio::test]
async fn unknown_name_resolves_to_itself() {
    let json = body_json(get(app(), "/api/v1/icons/resolve?name=Theremin&kind=instrument").await).await;

    assert_eq!(json["data"]["display"], "Theremin");
    assert!(json["data"]["id"].is_null());
}

#[tokio::test]
async fn canonicalize_maps_names_and_drops_blanks() {
    let body = json!({ "kind": "genre", "names": ["Hip Hop", "  ", "R&B", "Sea Shanty"] });
    let response = post_json(app(), "/api/v1/icons/canonicalize", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["ids"], json!(["hip_hop", "rnb", "seashanty"]));
}

#[tokio::test]
async fn layout_projects_chrome_by_width() {
    let wide = body_json(get(app(), "/api/v1/layout?width=1024").await).await;
    assert_eq!(wide["data"]["view"]["chrome"], "side_panel");

    let narrow = body_json(get(app(), "/api/v1/layout?width=1023").await).await;
    assert_eq!(narrow["data"]["view"]["chrome"], "bottom_bar");
}

#[tokio::test]
async fn selecting_events_leaves_the_shell() {
    let json = body_json(get(app(), "/api/v1/layout?width=800&active=events&is_current_user=true").await).await;

    assert_eq!(json["data"]["action"]["kind"], "navigate");
    assert_eq!(json["data"]["action"]["target"]["path"], "/");
}

#[tokio::test]
async fn selecting_chat_switches_in_place() {
    let json = body_json(get(app(), "/api/v1/layout?active=chat").await).await;

    assert_eq!(json["data"]["action"], json!({ "kind": "activate", "target": "chat" }));
    let active: Vec<_> = json["data"]["view"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["active"] == true)
        .map(|item| item["screen"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(active, vec!["chat".to_string()]);
}
