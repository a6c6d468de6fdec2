//! Persistence errors for the `tb_alunos` table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Driver, pool, or SQL failure.
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A lookup or delete by id matched no student.
    #[error("student row not found")]
    NotFound,

    #[error("could not apply tb_alunos migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
