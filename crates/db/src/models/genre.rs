//! Genre models and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use gamedex_core::types::DbId;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// Input for creating or updating a genre.
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
}
