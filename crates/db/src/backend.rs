//! [`PgBackend`]: the Postgres implementation of the core backend traits.
//!
//! Repositories report a missing row as `Ok(None)`; here that becomes
//! [`BackendError::NoRows`], the sentinel the page orchestration branches on.
//! Every other sqlx failure is flattened into [`BackendError::Query`].

use async_trait::async_trait;
use jamboree_core::event_card::{Event, EventSource};
use jamboree_core::profile::Profile;
use jamboree_core::profile_page::{BackendError, ProfileSource};
use jamboree_core::types::DbId;

use crate::models::profile::UpsertProfile;
use crate::repositories::{EventRepo, ProfileRepo, UserRepo};
use crate::DbPool;

#[derive(Clone)]
pub struct PgBackend {
    pool: DbPool,
}

impl PgBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a sqlx error onto the backend taxonomy.
pub fn classify_sqlx_error(err: sqlx::Error) -> BackendError {
    match err {
        sqlx::Error::RowNotFound => BackendError::NoRows,
        other => {
            tracing::warn!(error = %other, "Backend query failed");
            BackendError::Query(other.to_string())
        }
    }
}

fn required<T>(row: Result<Option<T>, sqlx::Error>) -> Result<T, BackendError> {
    row.map_err(classify_sqlx_error)?.ok_or(BackendError::NoRows)
}

#[async_trait]
impl ProfileSource for PgBackend {
    async fn profile_by_id(&self, id: DbId) -> Result<Profile, BackendError> {
        required(ProfileRepo::find_by_id(&self.pool, id).await).map(Profile::from)
    }

    async fn user_by_id(&self, id: DbId) -> Result<DbId, BackendError> {
        required(UserRepo::find_by_id(&self.pool, id).await).map(|user| user.id)
    }

    async fn save_profile(&self, profile: &Profile) -> Result<Profile, BackendError> {
        let input = UpsertProfile::from(profile);
        let row = ProfileRepo::upsert(&self.pool, &input)
            .await
            .map_err(classify_sqlx_error)?;
        tracing::info!(profile_id = %row.id, "Profile saved");
        Ok(row.into())
    }
}

#[async_trait]
impl EventSource for PgBackend {
    async fn event_by_id(&self, id: DbId) -> Result<Event, BackendError> {
        required(EventRepo::find_by_id(&self.pool, id).await).map(Event::from)
    }

    async fn event_participants(&self, event_id: DbId) -> Result<Vec<Profile>, BackendError> {
        let rows = EventRepo::list_participants(&self.pool, event_id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }
}
