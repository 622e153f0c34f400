//! Routes for the game pages and endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// ```text
/// GET  /                   -> index
/// GET  /games/add          -> add_form
/// POST /games/add          -> create (multipart)
/// GET  /games/{id}/edit    -> edit_form
/// POST /games/{id}/edit    -> update (multipart)
/// POST /games/{id}/delete  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::index))
        .route("/games/add", get(games::add_form).post(games::create))
        .route("/games/{id}/edit", get(games::edit_form).post(games::update))
        .route("/games/{id}/delete", post(games::delete))
}
