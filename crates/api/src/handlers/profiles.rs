//! Handlers for profile pages and participant cards.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use jamboree_core::error::CoreError;
use jamboree_core::participant_card::ParticipantCard;
use jamboree_core::profile::Profile;
use jamboree_core::profile_page::{check_existence, load_profile_page, Existence};
use jamboree_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::Viewer;
use crate::response::data;
use crate::state::AppState;

/// GET /api/v1/profiles/{id}/page
///
/// Resolve the profile page for `id` as seen by the current viewer. The
/// page state itself carries loading, error and not-found outcomes, so this
/// always answers 200.
pub async fn get_profile_page(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> impl IntoResponse {
    let page = load_profile_page(state.profiles.as_ref(), profile_id, viewer.user_id()).await;
    data(page)
}

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    /// Render the card with the host marker.
    #[serde(default)]
    pub host: bool,
}

/// GET /api/v1/profiles/{id}/card?host=bool
pub async fn get_participant_card(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    Query(query): Query<CardQuery>,
) -> AppResult<impl IntoResponse> {
    let profile = match check_existence(state.profiles.as_ref(), profile_id).await? {
        Existence::Profile(profile) => profile,
        Existence::AccountOnly(user_id) => Profile::empty(user_id),
        Existence::Missing => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: profile_id,
            }))
        }
    };

    let host_id = query.host.then_some(profile.id);
    let card = ParticipantCard::render(&profile.into_participant(host_id));
    Ok(data(card))
}
