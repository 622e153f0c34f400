//! Routes for the genre pages and endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(genres::index))
        .route("/genres/add", get(genres::add_form).post(genres::create))
        .route(
            "/genres/{id}/edit",
            get(genres::edit_form).post(genres::update),
        )
        .route("/genres/{id}/delete", post(genres::delete))
}
