//! Repository for the `genres` table.

use sqlx::PgPool;

use gamedex_core::types::DbId;

use crate::models::genre::{Genre, NewGenre};

/// Column list for `genres` queries.
const GENRE_COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {GENRE_COLUMNS} FROM genres ORDER BY name ASC");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {GENRE_COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a genre.
    pub async fn create(pool: &PgPool, input: &NewGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {GENRE_COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a genre's name. Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &NewGenre) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE genres SET name = $1 WHERE id = $2")
            .bind(&input.name)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a genre. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
