//! Handlers for event navigation: the redirect, publishing `openEvent`
//! intents, and the per-viewer server-sent event stream.

use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use futures::{Stream, StreamExt};
use jamboree_core::navigation::navigate_to_event;
use jamboree_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::navigation::stream::navigation_targets;
use crate::response::data;
use crate::state::AppState;

/// SSE event name carrying a target href.
pub const NAVIGATE_EVENT: &str = "navigate";

/// GET /api/v1/navigation/events/{id}
///
/// Full route transition to the root page with the event open.
pub async fn event_redirect(Path(event_id): Path<DbId>) -> Redirect {
    Redirect::to(&navigate_to_event(event_id).href())
}

#[derive(Debug, Deserialize)]
pub struct OpenEventRequest {
    #[serde(alias = "eventId")]
    pub event_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct OpenEventResponse {
    pub event_id: DbId,
    /// Listeners attached when the intent was published.
    pub delivered: usize,
}

/// POST /api/v1/navigation/open-event
///
/// Publish an `openEvent` intent on the caller's own channel.
pub async fn open_event(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<OpenEventRequest>,
) -> AppResult<impl IntoResponse> {
    let delivered = state
        .navigation
        .open_event(user.user_id, input.event_id)
        .await;

    tracing::info!(
        user_id = %user.user_id,
        event_id = %input.event_id,
        delivered,
        "openEvent intent published",
    );

    Ok((
        StatusCode::ACCEPTED,
        data(OpenEventResponse {
            event_id: input.event_id,
            delivered,
        }),
    ))
}

/// GET /api/v1/navigation/stream
///
/// One `navigate` event per target, its data the href. The listener is
/// attached for as long as the client stays connected.
pub async fn stream(
    user: AuthUser,
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let bus = state.navigation.bus_for(user.user_id).await;
    let targets = navigation_targets(&bus);
    tracing::info!(user_id = %user.user_id, "Navigation stream opened");

    let events = targets.map(|target| Ok(Event::default().event(NAVIGATE_EVENT).data(target.href())));
    Sse::new(events).keep_alive(KeepAlive::default())
}
