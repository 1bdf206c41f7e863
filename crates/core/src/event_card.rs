//! Event card projection: schedule labels plus participant cards.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::display_time::{format_event_card_date, format_time_range, is_same_day};
use crate::error::CoreError;
use crate::participant_card::{CardView, ParticipantCard};
use crate::profile::Profile;
use crate::profile_page::BackendError;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub host_id: DbId,
}

/// Point lookups used to build an event card.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn event_by_id(&self, id: DbId) -> Result<Event, BackendError>;

    /// Profiles of everyone who joined the event, host included.
    async fn event_participants(&self, event_id: DbId) -> Result<Vec<Profile>, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub id: DbId,
    pub title: String,
    pub location: Option<String>,
    /// e.g. `Tue, Mar 5`
    pub date_label: String,
    /// e.g. `7:00 PM - 10:00 PM`
    pub time_label: String,
    pub is_today: bool,
    /// Host first, then everyone else in the order given.
    pub participants: Vec<CardView>,
}

impl EventCard {
    pub fn project(event: Event, participants: Vec<Profile>, now: Timestamp) -> Result<Self, CoreError> {
        if event.ends_at < event.starts_at {
            return Err(CoreError::Validation(format!(
                "Event {} ends before it starts",
                event.id
            )));
        }

        let host_id = Some(event.host_id);
        let (mut hosts, guests): (Vec<_>, Vec<_>) = participants
            .into_iter()
            .map(|p| p.into_participant(host_id))
            .partition(|p| p.is_host);
        hosts.extend(guests);

        Ok(Self {
            date_label: format_event_card_date(&event.starts_at)?,
            time_label: format_time_range(&event.starts_at, &event.ends_at)?,
            is_today: is_same_day(&event.starts_at, &now)?,
            participants: hosts.iter().map(ParticipantCard::render).collect(),
            id: event.id,
            title: event.title,
            location: event.location,
        })
    }
}
