//! Profile entity model and DTOs.

use jamboree_core::profile::Profile;
use jamboree_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileRow {
    pub id: DbId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub instruments: Vec<String>,
    pub genres: Vec<String>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            instruments: row.instruments,
            genres: row.genres,
            bio: row.bio,
        }
    }
}

/// DTO for inserting or replacing a profile. Array fields hold canonical ids.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfile {
    pub id: DbId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub instruments: Vec<String>,
    pub genres: Vec<String>,
    pub bio: Option<String>,
}

impl From<&Profile> for UpsertProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            instruments: profile.instruments.clone(),
            genres: profile.genres.clone(),
            bio: profile.bio.clone(),
        }
    }
}
