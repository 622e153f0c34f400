//! Game models and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use gamedex_core::types::DbId;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    /// Browser-facing relative path (`/images/<file>`), if an image was uploaded.
    pub image_url: Option<String>,
}

/// A game annotated with comma-joined developer and genre names, as shown
/// on the list view. The joined columns are NULL for a game with no links
/// (cannot happen through the forms, but the query must tolerate it).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameListing {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub image_url: Option<String>,
    pub developers: Option<String>,
    pub genres: Option<String>,
}

/// Input for creating or fully replacing a game and its relation sets.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub title: String,
    pub release_date: NaiveDate,
    pub image_url: Option<String>,
    pub developer_ids: Vec<DbId>,
    pub genre_ids: Vec<DbId>,
}
