//! Integration tests for the viewer's account and onboarding endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, put_json_auth, token_for, MemoryBackend};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn me_requires_a_session() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let response = get(app, "/api/v1/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing access token");
}

#[tokio::test]
async fn expired_or_forged_token_is_rejected() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let response = get_auth(app, "/api/v1/me", "forged.token.value").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn new_account_is_sent_to_onboarding() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let user_id = Uuid::new_v4();

    let json = body_json(get_auth(app, "/api/v1/me", &token_for(user_id)).await).await;

    assert_eq!(json["data"]["user_id"], user_id.to_string());
    assert!(json["data"]["profile"].is_null());
    assert_eq!(json["data"]["onboarded"], false);
    assert_eq!(json["data"]["home_route"], "/onboarding");
}

#[tokio::test]
async fn onboarding_canonicalizes_and_completes_profile() {
    let backend = Arc::new(MemoryBackend::default());
    let app = common::build_test_app(backend.clone());
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);

    let body = json!({
        "full_name": "  Jo Park ",
        "avatar_url": "https://cdn.example/jo.png",
        "instruments": ["Electric  Guitar", "drums", "Drums", ""],
        "genres": ["HipHop", "Math Rock"],
        "bio": " Weekend riffs ",
    });
    let response = put_json_auth(app.clone(), "/api/v1/me/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["onboarded"], true);
    assert_eq!(json["data"]["home_route"], "/");
    assert_eq!(
        json["data"]["profile"]["instruments"],
        json!(["electric_guitar", "drums"])
    );
    assert_eq!(json["data"]["profile"]["genres"], json!(["hip_hop", "mathrock"]));

    let stored = backend.stored_profile(user_id).expect("profile stored");
    assert_eq!(stored.full_name.as_deref(), Some("Jo Park"));
    assert_eq!(stored.bio.as_deref(), Some("Weekend riffs"));

    let me = body_json(get_auth(app, "/api/v1/me", &token).await).await;
    assert_eq!(me["data"]["home_route"], "/");
}

#[tokio::test]
async fn incomplete_onboarding_stays_on_onboarding() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let token = token_for(Uuid::new_v4());

    let body = json!({ "instruments": ["piano"], "bio": "   " });
    let json = body_json(put_json_auth(app, "/api/v1/me/profile", body, &token).await).await;

    assert_eq!(json["data"]["onboarded"], false);
    assert_eq!(json["data"]["home_route"], "/onboarding");
    assert!(json["data"]["profile"]["bio"].is_null());
}
