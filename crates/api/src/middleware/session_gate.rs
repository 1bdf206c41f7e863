//! Protected-route gate for `/dashboard`.
//!
//! Runs in front of every request. Paths outside the protected prefix pass
//! straight through; protected paths without a session are redirected to
//! the public root according to the configured [`GatePolicy`]. No state is
//! kept between requests.

use std::str::FromStr;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::session::current_session;
use crate::state::AppState;

/// Path prefix guarded by the gate.
pub const PROTECTED_PREFIX: &str = "/dashboard";
/// Where session-less requests are sent.
pub const PUBLIC_ROOT: &str = "/";

/// Which protected paths redirect when there is no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePolicy {
    /// Every path under the prefix redirects.
    #[default]
    Prefix,
    /// Only the prefix itself redirects; deeper paths pass through.
    Exact,
}

impl FromStr for GatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(GatePolicy::Prefix),
            "exact" => Ok(GatePolicy::Exact),
            other => Err(format!("unknown gate policy '{other}'")),
        }
    }
}

/// Whether `path` falls under the protected prefix.
pub fn is_protected(path: &str) -> bool {
    path == PROTECTED_PREFIX
        || path
            .strip_prefix(PROTECTED_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether a request for `path` must be redirected.
pub fn should_redirect(policy: GatePolicy, path: &str, has_session: bool) -> bool {
    if has_session || !is_protected(path) {
        return false;
    }
    match policy {
        GatePolicy::Prefix => true,
        GatePolicy::Exact => path.trim_end_matches('/') == PROTECTED_PREFIX,
    }
}

/// Axum middleware enforcing the gate.
pub async fn session_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if !is_protected(path) {
        return next.run(request).await;
    }

    let has_session = current_session(request.headers(), &state.config.session).is_some();
    if should_redirect(state.config.gate_policy, path, has_session) {
        tracing::info!(path = %path, "No session for protected route, redirecting");
        return Redirect::to(PUBLIC_ROOT).into_response();
    }

    next.run(request).await
}
