//! Integration tests for event cards.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::{body_json, get, MemoryBackend};
use jamboree_core::event_card::Event;
use jamboree_core::profile::Profile;
use uuid::Uuid;

fn named(name: &str) -> Profile {
    Profile {
        full_name: Some(name.to_string()),
        ..Profile::empty(Uuid::new_v4())
    }
}

#[tokio::test]
async fn card_lists_host_first_with_pacific_labels() {
    let backend = Arc::new(MemoryBackend::default());
    let host = named("Ana");
    let guest = named("Ben");
    let event = Event {
        id: Uuid::new_v4(),
        title: "Sunday Session".into(),
        location: Some("Echo Park".into()),
        // 19:00 - 22:00 PST
        starts_at: Utc.with_ymd_and_hms(2024, 3, 6, 3, 0, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2024, 3, 6, 6, 0, 0).unwrap(),
        host_id: host.id,
    };
    let event_id = event.id;
    backend.add_event(event);
    // Guest joined first.
    backend.join_event(event_id, guest.id);
    backend.join_event(event_id, host.id);
    backend.add_profile(guest);
    backend.add_profile(host);

    let response = get(
        common::build_test_app(backend),
        &format!("/api/v1/events/{event_id}/card"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Sunday Session");
    assert_eq!(json["data"]["date_label"], "Tue, Mar 5");
    assert_eq!(json["data"]["time_label"], "7:00 PM - 10:00 PM");
    assert_eq!(json["data"]["is_today"], false);

    let names: Vec<_> = json["data"]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name_line"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ana (Host)".to_string(), "Ben".to_string()]);
}

#[tokio::test]
async fn unknown_event_is_404() {
    let backend = Arc::new(MemoryBackend::default());
    let response = get(
        common::build_test_app(backend),
        &format!("/api/v1/events/{}/card", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
