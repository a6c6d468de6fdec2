//! Engine-level error types.

use thiserror::Error;

/// Errors produced by the student registry (validation + persistence).
#[derive(Debug, Error)]
pub enum EngineError {
    // ------ Validation errors ------

    /// A create payload failed validation.
    #[error("invalid student: {0}")]
    InvalidStudent(String),

    // ------ Lookup errors ------

    /// No student with the given id exists.
    #[error("student {0} not found")]
    NotFound(i32),

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}
