//! Developer models and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use gamedex_core::types::DbId;

/// A row from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: DbId,
    pub name: String,
    pub country: String,
}

/// Input for creating or updating a developer.
#[derive(Debug, Clone)]
pub struct NewDeveloper {
    pub name: String,
    pub country: String,
}
