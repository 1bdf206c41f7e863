//! Handler for event cards.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::Utc;
use jamboree_core::error::CoreError;
use jamboree_core::event_card::EventCard;
use jamboree_core::profile_page::BackendError;
use jamboree_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::data;
use crate::state::AppState;

/// GET /api/v1/events/{id}/card
///
/// Schedule labels in Pacific time plus one participant card per member,
/// host first.
pub async fn get_event_card(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.event_by_id(event_id).await.map_err(|err| match err {
        BackendError::NoRows => AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }),
        other => AppError::Backend(other),
    })?;
    let participants = state.events.event_participants(event_id).await?;

    let card = EventCard::project(event, participants, Utc::now())?;
    Ok(data(card))
}
