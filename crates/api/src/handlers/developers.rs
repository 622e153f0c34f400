//! Handlers for the developer pages and endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use gamedex_core::error::CoreError;
use gamedex_core::types::DbId;
use gamedex_core::validation::validate_developer;
use gamedex_db::models::developer::NewDeveloper;
use gamedex_db::repositories::DeveloperRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Raw developer form fields.
#[derive(Debug, Deserialize)]
pub struct DeveloperFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// GET /developers
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let developers = DeveloperRepo::list(&state.pool).await?;
    Ok(views::developers_index(&developers))
}

/// GET /developers/add
pub async fn add_form() -> Html<String> {
    views::developer_form("/developers/add", None)
}

/// POST /developers/add
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<DeveloperFormData>,
) -> AppResult<Redirect> {
    let valid = validate_developer(&input.name, &input.country).map_err(AppError::Validation)?;

    let developer = DeveloperRepo::create(
        &state.pool,
        &NewDeveloper {
            name: valid.name,
            country: valid.country,
        },
    )
    .await?;

    tracing::info!(developer_id = developer.id, "Developer created");
    Ok(Redirect::to("/developers"))
}

/// GET /developers/{id}/edit
///
/// A missing id renders the empty form; absence is a normal outcome.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let developer = DeveloperRepo::find_by_id(&state.pool, id).await?;
    let action = format!("/developers/{id}/edit");
    Ok(views::developer_form(&action, developer.as_ref()))
}

/// POST /developers/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<DeveloperFormData>,
) -> AppResult<Redirect> {
    let valid = validate_developer(&input.name, &input.country).map_err(AppError::Validation)?;

    let updated = DeveloperRepo::update(
        &state.pool,
        id,
        &NewDeveloper {
            name: valid.name,
            country: valid.country,
        },
    )
    .await?;

    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Developer",
            id,
        }));
    }

    tracing::info!(developer_id = id, "Developer updated");
    Ok(Redirect::to("/developers"))
}

/// POST /developers/{id}/delete
///
/// Answers `{"success": bool}`. Deleting a developer still linked to a
/// game fails on the link table's foreign key and reports
/// `{"success": false}` without leaking the constraint detail.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    match DeveloperRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(developer_id = id, "Developer deleted");
            Json(json!({ "success": true })).into_response()
        }
        Ok(false) => AppError::Core(CoreError::NotFound {
            entity: "Developer",
            id,
        })
        .into_response(),
        Err(err) => {
            tracing::error!(developer_id = id, error = %err, "Failed to delete developer");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false })),
            )
                .into_response()
        }
    }
}
