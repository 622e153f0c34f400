//! Handlers for the game pages and endpoints.
//!
//! Game submissions arrive as multipart forms (they may carry a cover
//! image). Image files are only ever removed after the database write
//! that stops referencing them has succeeded.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use gamedex_core::error::CoreError;
use gamedex_core::types::DbId;
use gamedex_core::validation::validate_game;
use gamedex_db::models::game::NewGame;
use gamedex_db::repositories::{DeveloperRepo, GameRepo, GenreRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::{forms, uploads, views};

/// GET /
///
/// List all games with their joined developer and genre names.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let games = GameRepo::list_with_relations(&state.pool).await?;
    Ok(views::games_index(&games))
}

/// GET /games/add
///
/// Empty game form with the full developer and genre lists for the
/// selectors.
pub async fn add_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let developers = DeveloperRepo::list(&state.pool).await?;
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(views::game_form(
        "/games/add",
        None,
        &developers,
        &genres,
        &[],
        &[],
    ))
}

/// POST /games/add (multipart)
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> AppResult<Redirect> {
    let form = forms::parse_game_form(multipart).await?;
    let valid = validate_game(&form.draft(), Utc::now().date_naive(), true)
        .map_err(AppError::Validation)?;

    // An image is required on create, so validation guarantees one is here.
    let image = form
        .image
        .as_ref()
        .ok_or_else(|| AppError::Internal("image missing after validation".into()))?;
    let image_url = uploads::store_image(&state.config.public_dir, &image.filename, &image.bytes)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let input = NewGame {
        title: valid.title,
        release_date: valid.release_date,
        image_url: Some(image_url.clone()),
        developer_ids: valid.developer_ids,
        genre_ids: valid.genre_ids,
    };

    match GameRepo::create(&state.pool, &input).await {
        Ok(game) => {
            tracing::info!(game_id = game.id, "Game created");
            Ok(Redirect::to("/"))
        }
        Err(err) => {
            // The write failed, so the file just written is unreferenced.
            uploads::remove_image(&state.config.public_dir, &image_url).await;
            Err(err.into())
        }
    }
}

/// GET /games/{id}/edit
///
/// Populated game form. A missing id renders the empty form — absence is
/// a normal outcome here, not an error.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let game = GameRepo::find_by_id(&state.pool, id).await?;
    let developers = DeveloperRepo::list(&state.pool).await?;
    let genres = GenreRepo::list(&state.pool).await?;

    let (developer_ids, genre_ids) = match &game {
        Some(game) => (
            GameRepo::developer_ids(&state.pool, game.id).await?,
            GameRepo::genre_ids(&state.pool, game.id).await?,
        ),
        None => (Vec::new(), Vec::new()),
    };

    let action = format!("/games/{id}/edit");
    Ok(views::game_form(
        &action,
        game.as_ref(),
        &developers,
        &genres,
        &developer_ids,
        &genre_ids,
    ))
}

/// POST /games/{id}/edit (multipart)
///
/// Full replace of scalar fields and both relation sets. With no new
/// file, the submitted `existing_image` path is retained; with one, the
/// replaced file is deleted only after the update commits.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Redirect> {
    let form = forms::parse_game_form(multipart).await?;
    let valid = validate_game(&form.draft(), Utc::now().date_naive(), false)
        .map_err(AppError::Validation)?;

    let new_image_url = match &form.image {
        Some(image) => Some(
            uploads::store_image(&state.config.public_dir, &image.filename, &image.bytes)
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?,
        ),
        None => None,
    };
    let image_url = new_image_url.clone().or_else(|| form.existing_image.clone());

    let input = NewGame {
        title: valid.title,
        release_date: valid.release_date,
        image_url,
        developer_ids: valid.developer_ids,
        genre_ids: valid.genre_ids,
    };

    match GameRepo::update(&state.pool, id, &input).await {
        Ok(true) => {
            if let (Some(_), Some(old)) = (&new_image_url, &form.existing_image) {
                uploads::remove_image(&state.config.public_dir, old).await;
            }
            tracing::info!(game_id = id, "Game updated");
            Ok(Redirect::to("/"))
        }
        Ok(false) => {
            if let Some(new_url) = &new_image_url {
                uploads::remove_image(&state.config.public_dir, new_url).await;
            }
            Err(AppError::Core(CoreError::NotFound { entity: "Game", id }))
        }
        Err(err) => {
            if let Some(new_url) = &new_image_url {
                uploads::remove_image(&state.config.public_dir, new_url).await;
            }
            Err(err.into())
        }
    }
}

/// POST /games/{id}/delete
///
/// API-style endpoint invoked asynchronously from the list view; answers
/// with a JSON ack rather than a redirect. The existence check runs first
/// so the image path to remove is known before the row disappears.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;

    GameRepo::delete(&state.pool, id).await?;

    if let Some(image_url) = &game.image_url {
        uploads::remove_image(&state.config.public_dir, image_url).await;
    }

    tracing::info!(game_id = id, "Game deleted");
    Ok((StatusCode::OK, Json(json!({}))).into_response())
}
