use axum::routing::{get, post};
use axum::Router;

use crate::handlers::icons;
use crate::state::AppState;

/// Icon table routes mounted at `/icons`.
///
/// ```text
/// GET  /               -> list_icons
/// GET  /resolve        -> resolve
/// POST /canonicalize   -> canonicalize
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(icons::list_icons))
        .route("/resolve", get(icons::resolve))
        .route("/canonicalize", post(icons::canonicalize))
}
