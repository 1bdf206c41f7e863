use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Profile routes mounted at `/profiles`.
///
/// ```text
/// GET /{id}/page   -> get_profile_page
/// GET /{id}/card   -> get_participant_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/page", get(profiles::get_profile_page))
        .route("/{id}/card", get(profiles::get_participant_card))
}
