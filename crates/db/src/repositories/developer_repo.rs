//! Repository for the `developers` table.

use sqlx::PgPool;

use gamedex_core::types::DbId;

use crate::models::developer::{Developer, NewDeveloper};

/// Column list for `developers` queries.
const DEVELOPER_COLUMNS: &str = "id, name, country";

/// Provides CRUD operations for developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// List all developers ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Developer>, sqlx::Error> {
        let query = format!("SELECT {DEVELOPER_COLUMNS} FROM developers ORDER BY name ASC");
        sqlx::query_as::<_, Developer>(&query).fetch_all(pool).await
    }

    /// Find a developer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Developer>, sqlx::Error> {
        let query = format!("SELECT {DEVELOPER_COLUMNS} FROM developers WHERE id = $1");
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a developer.
    pub async fn create(pool: &PgPool, input: &NewDeveloper) -> Result<Developer, sqlx::Error> {
        let query = format!(
            "INSERT INTO developers (name, country) VALUES ($1, $2) RETURNING {DEVELOPER_COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a developer's fields. Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewDeveloper,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE developers SET name = $1, country = $2 WHERE id = $3")
            .bind(&input.name)
            .bind(&input.country)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a developer. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation if the developer is still
    /// linked to a game; the caller surfaces that as a persistence error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
