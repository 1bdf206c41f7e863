//! Repository for the `events` and `event_members` tables.

use jamboree_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, EventRow};
use crate::models::profile::ProfileRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, location, starts_at, ends_at, host_id, created_at";

/// Provides event lookups and membership management.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event and enroll its host as the first member.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<EventRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO events (title, location, starts_at, ends_at, host_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, EventRow>(&query)
            .bind(&input.title)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(input.host_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO event_members (event_id, profile_id) VALUES ($1, $2)")
            .bind(event.id)
            .bind(event.host_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(event)
    }

    /// Find an event by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, EventRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Add a profile to an event. Joining twice is a no-op.
    ///
    /// Returns `true` if a membership row was created.
    pub async fn add_member(
        pool: &PgPool,
        event_id: DbId,
        profile_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO event_members (event_id, profile_id)
             VALUES ($1, $2)
             ON CONFLICT (event_id, profile_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(profile_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Profiles of every member, in join order.
    pub async fn list_participants(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<ProfileRow>, sqlx::Error> {
        sqlx::query_as::<_, ProfileRow>(
            "SELECT p.id, p.full_name, p.avatar_url, p.instruments, p.genres, p.bio,
                    p.created_at, p.updated_at
             FROM event_members m
             JOIN profiles p ON p.id = m.profile_id
             WHERE m.event_id = $1
             ORDER BY m.joined_at, p.id",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }
}
