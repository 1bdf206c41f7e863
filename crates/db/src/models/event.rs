//! Event entity model and DTOs.

use jamboree_core::event_card::Event;
use jamboree_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventRow {
    pub id: DbId,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub host_id: DbId,
    pub created_at: Timestamp,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            location: row.location,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            host_id: row.host_id,
        }
    }
}

/// DTO for creating an event. The host joins as a member automatically.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub host_id: DbId,
}
