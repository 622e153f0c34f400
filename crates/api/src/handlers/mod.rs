//! Request handlers, one submodule per entity.
//!
//! Each submodule provides the list page, the add/edit form pages, the
//! submit handlers (validate, persist, redirect), and the delete endpoint.
//! Handlers delegate to the repositories in `gamedex_db` and map errors
//! via [`crate::error::AppError`].

pub mod developers;
pub mod games;
pub mod genres;
