//! Instrument and genre icon table.
//!
//! Profiles store canonical identifiers (`electric_guitar`, `hip_hop`);
//! people type free text (`Electric  guitar`, `HipHop`). Both sides are
//! compared through [`normalize`], which lowercases and strips whitespace.

use serde::{Deserialize, Serialize};

/// Which half of the table an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Instrument,
    Genre,
}

/// A static, immutable icon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MusicIcon {
    /// Canonical identifier persisted on profiles.
    pub id: &'static str,
    /// Human-readable canonical name.
    pub name: &'static str,
    pub glyph: &'static str,
    pub kind: IconKind,
}

const fn instrument(id: &'static str, name: &'static str, glyph: &'static str) -> MusicIcon {
    MusicIcon {
        id,
        name,
        glyph,
        kind: IconKind::Instrument,
    }
}

const fn genre(id: &'static str, name: &'static str, glyph: &'static str) -> MusicIcon {
    MusicIcon {
        id,
        name,
        glyph,
        kind: IconKind::Genre,
    }
}

/// Every known icon.
pub static MUSIC_ICONS: &[MusicIcon] = &[
    // Instruments
    instrument("acoustic_guitar", "Acoustic Guitar", "🎸"),
    instrument("electric_guitar", "Electric Guitar", "🎸"),
    instrument("bass", "Bass", "🎸"),
    instrument("drums", "Drums", "🥁"),
    instrument("piano", "Piano", "🎹"),
    instrument("keyboard", "Keyboard", "🎹"),
    instrument("vocals", "Vocals", "🎤"),
    instrument("violin", "Violin", "🎻"),
    instrument("cello", "Cello", "🎻"),
    instrument("saxophone", "Saxophone", "🎷"),
    instrument("trumpet", "Trumpet", "🎺"),
    instrument("flute", "Flute", "🪈"),
    instrument("banjo", "Banjo", "🪕"),
    instrument("accordion", "Accordion", "🪗"),
    instrument("dj", "DJ", "🎧"),
    instrument("production", "Production", "🎛️"),
    // Genres
    genre("rock", "Rock", "🤘"),
    genre("pop", "Pop", "🎵"),
    genre("jazz", "Jazz", "🎷"),
    genre("blues", "Blues", "🎺"),
    genre("hip_hop", "Hip Hop", "🎤"),
    genre("rnb", "R&B", "💜"),
    genre("electronic", "Electronic", "🎛️"),
    genre("classical", "Classical", "🎻"),
    genre("country", "Country", "🤠"),
    genre("folk", "Folk", "🪕"),
    genre("metal", "Metal", "⚡"),
    genre("punk", "Punk", "🧷"),
    genre("indie", "Indie", "🌙"),
    genre("reggae", "Reggae", "🌴"),
    genre("latin", "Latin", "💃"),
    genre("funk", "Funk", "🕺"),
];

/// Lowercase `name` and remove every whitespace character.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// All entries of one kind, in table order.
pub fn icons_of_kind(kind: IconKind) -> impl Iterator<Item = &'static MusicIcon> {
    MUSIC_ICONS.iter().filter(move |icon| icon.kind == kind)
}

/// Find the entry whose normalized name or identifier equals `normalize(name)`.
pub fn find_icon(name: &str, kind: IconKind) -> Option<&'static MusicIcon> {
    let needle = normalize(name);
    if needle.is_empty() {
        return None;
    }
    icons_of_kind(kind).find(|icon| normalize(icon.name) == needle || normalize(icon.id) == needle)
}

/// Glyph for `name`, or `name` itself when nothing matches.
pub fn resolve_icon(name: &str, kind: IconKind) -> String {
    match find_icon(name, kind) {
        Some(icon) => icon.glyph.to_string(),
        None => name.to_string(),
    }
}

/// Convert free-text names to identifiers suitable for persistence.
///
/// Known names map to their canonical id; unknown ones to their normalized
/// slug. Names that normalize to nothing are dropped.
pub fn to_canonical_ids<S: AsRef<str>>(names: &[S], kind: IconKind) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            match find_icon(name, kind) {
                Some(icon) => icon.id.to_string(),
                None => normalize(name),
            }
        })
        .filter(|id| !id.is_empty())
        .collect()
}
