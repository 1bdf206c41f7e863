//! Handler projecting the layout shell for a viewport.

use axum::extract::Query;
use axum::response::IntoResponse;
use jamboree_core::layout::{LayoutShell, Screen, ShellAction, ShellView, BREAKPOINT_PX};
use serde::{Deserialize, Serialize};

use crate::response::data;

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Viewport width in CSS pixels; defaults to the breakpoint.
    pub width: Option<u32>,
    /// Screen the user just picked.
    pub active: Option<Screen>,
    #[serde(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub view: ShellView,
    /// Outcome of selecting `active`, when one was given.
    pub action: Option<ShellAction>,
}

/// GET /api/v1/layout?width=&active=&is_current_user=
pub async fn get_layout(Query(query): Query<LayoutQuery>) -> impl IntoResponse {
    let mut shell = LayoutShell::new(query.is_current_user);
    let action = query.active.map(|screen| shell.select(screen));
    let view = shell.project(query.width.unwrap_or(BREAKPOINT_PX));
    data(LayoutResponse { view, action })
}
