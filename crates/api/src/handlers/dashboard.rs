//! Handlers behind the session gate.

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use jamboree_core::layout::{LayoutShell, ShellView, BREAKPOINT_PX};
use jamboree_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::middleware::auth::Viewer;
use crate::response::data;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub width: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Absent only when the gate let a session-less request through.
    pub user_id: Option<DbId>,
    /// Sub-path below `/dashboard`, if any.
    pub section: Option<String>,
    pub shell: ShellView,
}

/// GET /dashboard
pub async fn dashboard(viewer: Viewer, Query(query): Query<DashboardQuery>) -> impl IntoResponse {
    data(render(viewer, None, query))
}

/// GET /dashboard/{*rest}
pub async fn dashboard_section(
    viewer: Viewer,
    Path(section): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    data(render(viewer, Some(section), query))
}

fn render(viewer: Viewer, section: Option<String>, query: DashboardQuery) -> DashboardResponse {
    let user_id = viewer.user_id();
    let shell = LayoutShell::new(user_id.is_some());
    DashboardResponse {
        user_id,
        section: section.filter(|s| !s.is_empty()),
        shell: shell.project(query.width.unwrap_or(BREAKPOINT_PX)),
    }
}
