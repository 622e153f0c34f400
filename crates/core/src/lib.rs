//! Domain logic shared by the persistence and HTTP layers.
//!
//! Pure code only: shared type aliases, the domain error type, and form
//! validation. No database or I/O dependencies.

pub mod error;
pub mod types;
pub mod validation;
