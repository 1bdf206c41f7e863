//! Repository for the `profiles` table.

use jamboree_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{ProfileRow, UpsertProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, avatar_url, instruments, genres, bio, created_at, updated_at";

/// Provides lookups and upserts for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile, or replace every editable column of an existing one.
    pub async fn upsert(pool: &PgPool, input: &UpsertProfile) -> Result<ProfileRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, full_name, avatar_url, instruments, genres, bio)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                avatar_url = EXCLUDED.avatar_url,
                instruments = EXCLUDED.instruments,
                genres = EXCLUDED.genres,
                bio = EXCLUDED.bio
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(input.id)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .bind(&input.instruments)
            .bind(&input.genres)
            .bind(&input.bio)
            .fetch_one(pool)
            .await
    }
}
