//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /                          GET   game list
//! /games/add                 GET   game form        POST  create (multipart)
//! /games/{id}/edit           GET   populated form   POST  update (multipart)
//! /games/{id}/delete         POST  delete, JSON ack
//!
//! /developers                GET   developer list
//! /developers/add            GET   form             POST  create
//! /developers/{id}/edit      GET   populated form   POST  update
//! /developers/{id}/delete    POST  delete, JSON {"success": bool}
//!
//! /genres                    same pattern as /developers
//!
//! /health                    GET   service + database health
//! ```

pub mod developers;
pub mod games;
pub mod genres;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full application route tree (excluding static file serving,
/// which `main` mounts from the configured public directory).
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(games::router())
        .merge(developers::router())
        .merge(genres::router())
        .merge(health::router())
}
