//! Handlers for the genre pages and endpoints.
//!
//! Same pattern as the developer handlers, with a single `name` field.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use gamedex_core::error::CoreError;
use gamedex_core::types::DbId;
use gamedex_core::validation::validate_genre;
use gamedex_db::models::genre::NewGenre;
use gamedex_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Raw genre form fields.
#[derive(Debug, Deserialize)]
pub struct GenreFormData {
    #[serde(default)]
    pub name: String,
}

/// GET /genres
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(views::genres_index(&genres))
}

/// GET /genres/add
pub async fn add_form() -> Html<String> {
    views::genre_form("/genres/add", None)
}

/// POST /genres/add
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<GenreFormData>,
) -> AppResult<Redirect> {
    let valid = validate_genre(&input.name).map_err(AppError::Validation)?;

    let genre = GenreRepo::create(&state.pool, &NewGenre { name: valid.name }).await?;

    tracing::info!(genre_id = genre.id, "Genre created");
    Ok(Redirect::to("/genres"))
}

/// GET /genres/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let genre = GenreRepo::find_by_id(&state.pool, id).await?;
    let action = format!("/genres/{id}/edit");
    Ok(views::genre_form(&action, genre.as_ref()))
}

/// POST /genres/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<GenreFormData>,
) -> AppResult<Redirect> {
    let valid = validate_genre(&input.name).map_err(AppError::Validation)?;

    let updated = GenreRepo::update(&state.pool, id, &NewGenre { name: valid.name }).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }));
    }

    tracing::info!(genre_id = id, "Genre updated");
    Ok(Redirect::to("/genres"))
}

/// POST /genres/{id}/delete
///
/// Answers `{"success": bool}`, like the developer endpoint.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    match GenreRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(genre_id = id, "Genre deleted");
            Json(json!({ "success": true })).into_response()
        }
        Ok(false) => AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        })
        .into_response(),
        Err(err) => {
            tracing::error!(genre_id = id, error = %err, "Failed to delete genre");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false })),
            )
                .into_response()
        }
    }
}
