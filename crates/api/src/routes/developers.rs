//! Routes for the developer pages and endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::developers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/developers", get(developers::index))
        .route(
            "/developers/add",
            get(developers::add_form).post(developers::create),
        )
        .route(
            "/developers/{id}/edit",
            get(developers::edit_form).post(developers::update),
        )
        .route("/developers/{id}/delete", post(developers::delete))
}
