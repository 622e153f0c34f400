//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod developer_repo;
pub mod game_repo;
pub mod genre_repo;

pub use developer_repo::DeveloperRepo;
pub use game_repo::GameRepo;
pub use genre_repo::GenreRepo;
