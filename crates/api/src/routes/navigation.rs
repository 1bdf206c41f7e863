use axum::routing::{get, post};
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Navigation routes mounted at `/navigation`.
///
/// ```text
/// GET  /events/{id}   -> event_redirect (303 to /?event={id})
/// POST /open-event    -> open_event (auth required)
/// GET  /stream        -> stream (SSE, auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/{id}", get(navigation::event_redirect))
        .route("/open-event", post(navigation::open_event))
        .route("/stream", get(navigation::stream))
}
