//! Session extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jamboree_core::error::CoreError;
use jamboree_core::types::DbId;

use crate::auth::session::{current_session, token_from_headers, Session};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the request's access token.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub email: Option<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_config = &state.config.session;

        if token_from_headers(&parts.headers, &session_config.cookie_name).is_none() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Missing access token".into(),
            )));
        }

        let session = current_session(&parts.headers, session_config).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: session.user_id,
            email: session.email,
        })
    }
}

/// The current session, if any. Used by pages that render for anonymous
/// viewers too.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<Session>);

impl Viewer {
    pub fn user_id(&self) -> Option<DbId> {
        self.0.as_ref().map(|s| s.user_id)
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Viewer(current_session(&parts.headers, &state.config.session)))
    }
}
