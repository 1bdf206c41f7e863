pub mod dashboard;
pub mod health;
pub mod icons;
pub mod me;
pub mod navigation;
pub mod profiles;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profiles/{id}/page                 profile page state
/// /profiles/{id}/card                 participant card (?host=bool)
///
/// /icons                              icon table (?kind=instrument|genre)
/// /icons/resolve                      glyph or original name (?name=&kind=)
/// /icons/canonicalize                 free text to canonical ids (POST)
///
/// /layout                             shell view (?width=&active=&is_current_user=)
///
/// /navigation/events/{id}             303 to /?event={id}
/// /navigation/open-event              publish openEvent intent (POST, auth)
/// /navigation/stream                  navigation targets as SSE (auth)
///
/// /events/{id}/card                   event card with participants
///
/// /me                                 viewer profile + home route (auth)
/// /me/profile                         onboarding submit (PUT, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/profiles", profiles::router())
        .nest("/icons", icons::router())
        .route("/layout", get(handlers::layout::get_layout))
        .nest("/navigation", navigation::router())
        .route("/events/{id}/card", get(handlers::events::get_event_card))
        .nest("/me", me::router())
}
