//! Handlers for the viewer's own account: landing route and onboarding.

use std::collections::HashSet;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use jamboree_core::icons::{to_canonical_ids, IconKind};
use jamboree_core::profile::{home_route, Profile};
use jamboree_core::profile_page::BackendError;
use jamboree_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::data;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: DbId,
    pub email: Option<String>,
    pub profile: Option<Profile>,
    pub onboarded: bool,
    /// `/` once onboarding is complete, `/onboarding` before.
    pub home_route: &'static str,
}

impl MeResponse {
    fn new(user: AuthUser, profile: Option<Profile>) -> Self {
        Self {
            onboarded: profile.as_ref().is_some_and(Profile::is_onboarded),
            home_route: home_route(profile.as_ref()),
            user_id: user.user_id,
            email: user.email,
            profile,
        }
    }
}

/// GET /api/v1/me
pub async fn get_me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = match state.profiles.profile_by_id(user.user_id).await {
        Ok(profile) => Some(profile),
        Err(BackendError::NoRows) => None,
        Err(err) => return Err(err.into()),
    };

    Ok(data(MeResponse::new(user, profile)))
}

/// Onboarding form as typed by the user.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub bio: Option<String>,
}

/// PUT /api/v1/me/profile
///
/// Instruments and genres are stored as canonical ids; blank text fields
/// are stored as absent.
pub async fn update_my_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let profile = Profile {
        id: user.user_id,
        full_name: trimmed(input.full_name),
        avatar_url: trimmed(input.avatar_url),
        instruments: unique(to_canonical_ids(&input.instruments, IconKind::Instrument)),
        genres: unique(to_canonical_ids(&input.genres, IconKind::Genre)),
        bio: trimmed(input.bio),
    };

    let saved = state.profiles.save_profile(&profile).await?;

    tracing::info!(
        user_id = %user.user_id,
        onboarded = saved.is_onboarded(),
        "Profile saved",
    );

    Ok(data(MeResponse::new(user, Some(saved))))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Drop repeated ids, keeping first occurrences in order.
fn unique(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
