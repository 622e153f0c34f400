//! Gamedex API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! form decoding, upload storage, view rendering) so integration tests
//! and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod uploads;
pub mod views;
