//! Row structs and input DTOs, one module per entity.

pub mod developer;
pub mod game;
pub mod genre;
