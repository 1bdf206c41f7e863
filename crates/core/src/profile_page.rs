//! Profile page orchestration.
//!
//! Resolving a profile id takes up to two point lookups: the `profiles`
//! table first, then (only when that matched no row) the `users` table.
//! Accounts that exist in `users` but have no profile row still get a page.
//! The outcome is one of four mutually exclusive page states.

use async_trait::async_trait;
use serde::Serialize;

use crate::profile::Profile;
use crate::types::DbId;

/// Message shown for any failure other than "no row".
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to load profile. Please try again.";

// ---------------------------------------------------------------------------
// Backend seam
// ---------------------------------------------------------------------------

/// Failure of a point lookup against the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The query ran and matched zero rows.
    #[error("no matching row")]
    NoRows,
    /// Any other failure.
    #[error("backend query failed: {0}")]
    Query(String),
}

/// Point lookups used to resolve a profile page.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Look up a row in `profiles` by id.
    async fn profile_by_id(&self, id: DbId) -> Result<Profile, BackendError>;

    /// Look up a row in `users` by id, returning its id.
    async fn user_by_id(&self, id: DbId) -> Result<DbId, BackendError>;

    /// Insert or replace a profile row.
    async fn save_profile(&self, profile: &Profile) -> Result<Profile, BackendError>;
}

// ---------------------------------------------------------------------------
// Existence check
// ---------------------------------------------------------------------------

/// What the two lookups found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence {
    /// A `profiles` row.
    Profile(Profile),
    /// No profile, but a `users` row.
    AccountOnly(DbId),
    /// Neither table has the id.
    Missing,
}

impl Existence {
    pub fn exists(&self) -> bool {
        !matches!(self, Existence::Missing)
    }
}

/// Run the profiles lookup, then the users lookup only if the first matched
/// no row. Any other error is returned as-is.
pub async fn check_existence<S>(source: &S, id: DbId) -> Result<Existence, BackendError>
where
    S: ProfileSource + ?Sized,
{
    match source.profile_by_id(id).await {
        Ok(profile) => Ok(Existence::Profile(profile)),
        Err(BackendError::NoRows) => match source.user_by_id(id).await {
            Ok(user_id) => Ok(Existence::AccountOnly(user_id)),
            Err(BackendError::NoRows) => Ok(Existence::Missing),
            Err(err) => Err(err),
        },
        Err(err) => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Page state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub onboarded: bool,
    /// Whether the viewer is looking at their own profile.
    pub is_current_user: bool,
}

/// The four mutually exclusive renderings of a profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProfilePageState {
    Loading,
    Error { message: String },
    NotFound,
    Profile(ProfileView),
}

/// Independent facts about a page, reduced to a state by priority:
/// loading, then error, then not found, then the profile.
#[derive(Debug, Clone, Default)]
pub struct PageFlags {
    pub loading: bool,
    pub error: Option<String>,
    pub user_exists: bool,
    pub view: Option<ProfileView>,
}

impl PageFlags {
    pub fn into_state(self) -> ProfilePageState {
        if self.loading {
            return ProfilePageState::Loading;
        }
        if let Some(message) = self.error {
            return ProfilePageState::Error { message };
        }
        match (self.user_exists, self.view) {
            (true, Some(view)) => ProfilePageState::Profile(view),
            _ => ProfilePageState::NotFound,
        }
    }
}

/// Resolve the page for `id` as seen by `viewer`.
pub async fn load_profile_page<S>(source: &S, id: DbId, viewer: Option<DbId>) -> ProfilePageState
where
    S: ProfileSource + ?Sized,
{
    let is_current_user = viewer == Some(id);
    let mut flags = PageFlags::default();

    match check_existence(source, id).await {
        Ok(existence) => {
            flags.user_exists = existence.exists();
            let profile = match existence {
                Existence::Profile(profile) => Some(profile),
                Existence::AccountOnly(user_id) => Some(Profile::empty(user_id)),
                Existence::Missing => None,
            };
            flags.view = profile.map(|profile| ProfileView {
                onboarded: profile.is_onboarded(),
                profile,
                is_current_user,
            });
        }
        Err(err) => {
            tracing::error!(profile_id = %id, error = %err, "Profile lookup failed");
            flags.error = Some(GENERIC_ERROR_MESSAGE.to_string());
        }
    }

    flags.into_state()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
