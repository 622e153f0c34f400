//! Repository for the `games` table and its two link tables.
//!
//! Game writes fan out into `game_developers` and `game_genres`; every
//! multi-statement operation runs in a transaction so a failure leaves no
//! partial game and no partial link set behind.

use sqlx::{PgPool, Postgres, Transaction};

use gamedex_core::types::DbId;

use crate::models::game::{Game, GameListing, NewGame};

/// Column list for `games` queries.
const GAME_COLUMNS: &str = "id, title, release_date, image_url";

/// Provides CRUD operations for games and their relation sets.
pub struct GameRepo;

impl GameRepo {
    /// List all games, each annotated with comma-joined developer and
    /// genre names. Ordered by id (insertion order).
    pub async fn list_with_relations(pool: &PgPool) -> Result<Vec<GameListing>, sqlx::Error> {
        sqlx::query_as::<_, GameListing>(
            "SELECT g.id, g.title, g.release_date, g.image_url, \
                    STRING_AGG(DISTINCT d.name, ', ') AS developers, \
                    STRING_AGG(DISTINCT gn.name, ', ') AS genres \
             FROM games g \
             LEFT JOIN game_developers gd ON g.id = gd.game_id \
             LEFT JOIN developers d ON gd.developer_id = d.id \
             LEFT JOIN game_genres gg ON g.id = gg.game_id \
             LEFT JOIN genres gn ON gg.genre_id = gn.id \
             GROUP BY g.id \
             ORDER BY g.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The current developer-id set for a game.
    pub async fn developer_ids(pool: &PgPool, id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT developer_id FROM game_developers WHERE game_id = $1")
                .bind(id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// The current genre-id set for a game.
    pub async fn genre_ids(pool: &PgPool, id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT genre_id FROM game_genres WHERE game_id = $1")
                .bind(id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Insert a game and one link row per developer id and per genre id,
    /// as a single transaction.
    pub async fn create(pool: &PgPool, input: &NewGame) -> Result<Game, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO games (title, release_date, image_url) \
             VALUES ($1, $2, $3) \
             RETURNING {GAME_COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&insert_query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.image_url)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_links(&mut tx, game.id, input).await?;

        tx.commit().await?;
        Ok(game)
    }

    /// Overwrite a game's scalar fields and fully replace both relation
    /// sets, as a single transaction.
    ///
    /// Returns `Ok(false)` (after rolling back) if no game with this id
    /// exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &NewGame) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE games SET title = $1, release_date = $2, image_url = $3 WHERE id = $4",
        )
        .bind(&input.title)
        .bind(input.release_date)
        .bind(&input.image_url)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM game_developers WHERE game_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM game_genres WHERE game_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        Self::insert_links(&mut tx, id, input).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a game. Link rows are removed by `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert one link row per developer id and per genre id inside the
    /// caller's transaction.
    async fn insert_links(
        tx: &mut Transaction<'_, Postgres>,
        game_id: DbId,
        input: &NewGame,
    ) -> Result<(), sqlx::Error> {
        for developer_id in &input.developer_ids {
            sqlx::query("INSERT INTO game_developers (game_id, developer_id) VALUES ($1, $2)")
                .bind(game_id)
                .bind(*developer_id)
                .execute(&mut **tx)
                .await?;
        }

        for genre_id in &input.genre_ids {
            sqlx::query("INSERT INTO game_genres (game_id, genre_id) VALUES ($1, $2)")
                .bind(game_id)
                .bind(*genre_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}
