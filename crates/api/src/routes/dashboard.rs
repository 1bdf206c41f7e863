//! Routes for the session-gated dashboard, mounted at the root.
//!
//! The gate itself is applied to the whole application in
//! [`build_app_router`](crate::router::build_app_router) so it sees the
//! full request path.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET /dashboard           -> dashboard
/// GET /dashboard/{*rest}   -> dashboard_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/{*rest}", get(dashboard::dashboard_section))
}
