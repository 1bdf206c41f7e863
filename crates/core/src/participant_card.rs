//! Participant card projection.
//!
//! A card is a compact, stateless summary of a [`Participant`]: avatar,
//! name (with a host suffix), and a few instrument and genre glyphs.

use serde::Serialize;

use crate::icons::{resolve_icon, IconKind};
use crate::profile::Participant;
use crate::types::DbId;

/// Avatar shown when a participant has none.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder-avatar.svg";
/// Name shown when a participant has none.
pub const UNKNOWN_NAME: &str = "Unknown musician";
/// Suffix appended to the host's name.
pub const HOST_SUFFIX: &str = " (Host)";

pub const MAX_INSTRUMENT_GLYPHS: usize = 2;
pub const MAX_GENRE_GLYPHS: usize = 2;

/// Rendered card, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub participant_id: DbId,
    pub avatar_url: String,
    pub name_line: String,
    pub is_host: bool,
    pub instrument_glyphs: Vec<String>,
    pub genre_glyphs: Vec<String>,
    /// Where a click on the card leads when the caller has no handler.
    pub href: String,
}

impl CardView {
    /// Invoke `handler` with the participant this card shows.
    pub fn click<F, R>(&self, handler: F) -> R
    where
        F: FnOnce(DbId) -> R,
    {
        handler(self.participant_id)
    }
}

pub struct ParticipantCard;

impl ParticipantCard {
    pub fn render(participant: &Participant) -> CardView {
        let name = participant
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_NAME);

        let name_line = if participant.is_host {
            format!("{name}{HOST_SUFFIX}")
        } else {
            name.to_string()
        };

        let avatar_url = participant
            .avatar_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_AVATAR)
            .to_string();

        CardView {
            participant_id: participant.id,
            avatar_url,
            name_line,
            is_host: participant.is_host,
            instrument_glyphs: glyphs(&participant.instruments, IconKind::Instrument, MAX_INSTRUMENT_GLYPHS),
            genre_glyphs: glyphs(&participant.genres, IconKind::Genre, MAX_GENRE_GLYPHS),
            href: format!("/profile/{}", participant.id),
        }
    }
}

fn glyphs(names: &[String], kind: IconKind, limit: usize) -> Vec<String> {
    names
        .iter()
        .filter(|n| !n.trim().is_empty())
        .take(limit)
        .map(|n| resolve_icon(n, kind))
        .collect()
}
