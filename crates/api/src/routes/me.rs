use axum::routing::{get, put};
use axum::Router;

use crate::handlers::me;
use crate::state::AppState;

/// Current-user routes mounted at `/me` (auth required).
///
/// ```text
/// GET /           -> get_me
/// PUT /profile    -> update_my_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(me::get_me))
        .route("/profile", put(me::update_my_profile))
}
