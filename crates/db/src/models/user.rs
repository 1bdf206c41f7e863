//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use jamboree_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for mirroring an account from the auth service.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub id: DbId,
    pub email: Option<String>,
}
