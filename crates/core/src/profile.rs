//! Profile entity and its projections.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Route an onboarded viewer lands on.
pub const HOME_ROUTE: &str = "/";
/// Route a viewer without a complete profile is sent to.
pub const ONBOARDING_ROUTE: &str = "/onboarding";

/// A musician's profile as stored in the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: DbId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Canonical instrument identifiers.
    pub instruments: Vec<String>,
    /// Canonical genre identifiers.
    pub genres: Vec<String>,
    pub bio: Option<String>,
}

impl Profile {
    /// A profile with only an id, used for accounts that predate profiles.
    pub fn empty(id: DbId) -> Self {
        Self {
            id,
            full_name: None,
            avatar_url: None,
            instruments: Vec::new(),
            genres: Vec::new(),
            bio: None,
        }
    }

    /// Onboarding is complete when instruments, genres, bio and avatar are
    /// all present.
    pub fn is_onboarded(&self) -> bool {
        !self.instruments.is_empty()
            && !self.genres.is_empty()
            && is_present(self.bio.as_deref())
            && is_present(self.avatar_url.as_deref())
    }

    /// Project into a participant for an event hosted by `host_id`.
    pub fn into_participant(self, host_id: Option<DbId>) -> Participant {
        Participant {
            is_host: host_id == Some(self.id),
            id: self.id,
            full_name: self.full_name,
            avatar_url: self.avatar_url,
            instruments: self.instruments,
            genres: self.genres,
        }
    }
}

/// Compact view of a profile shown inside event and band listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: DbId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub instruments: Vec<String>,
    pub genres: Vec<String>,
    /// Derived from event membership, never stored on the profile.
    pub is_host: bool,
}

/// Where an authenticated viewer should land given their own profile.
pub fn home_route(own_profile: Option<&Profile>) -> &'static str {
    match own_profile {
        Some(profile) if profile.is_onboarded() => HOME_ROUTE,
        _ => ONBOARDING_ROUTE,
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
