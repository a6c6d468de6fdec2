//! Repository layer — one method per database operation.
//!
//! [`StudentStore`] is the seam between the domain and persistence:
//! [`PgStudentStore`] talks to Postgres, [`MemoryStudentStore`] keeps rows in
//! process so the engine and HTTP layers can be tested without a database.
//! No business logic, no domain types — rows in, rows out.

pub mod students;
pub mod memory;

use async_trait::async_trait;

use crate::{DbError, models::{NewStudentRow, StudentRow}};

pub use memory::MemoryStudentStore;
pub use students::PgStudentStore;

/// Persistence operations over the `tb_alunos` table.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Return every student ordered by primary key.
    async fn list_students(&self) -> Result<Vec<StudentRow>, DbError>;

    /// Fetch a single student; `DbError::NotFound` if absent.
    async fn get_student(&self, id: i32) -> Result<StudentRow, DbError>;

    /// Insert a student and return the stored row.
    async fn insert_student(&self, student: &NewStudentRow) -> Result<StudentRow, DbError>;

    /// Delete a student; `DbError::NotFound` if no row was deleted.
    async fn delete_student(&self, id: i32) -> Result<(), DbError>;

    /// Write approval flags for many students atomically.
    ///
    /// Ids that no longer exist are skipped. Returns the number of rows updated.
    async fn set_approvals(&self, updates: &[(i32, bool)]) -> Result<u64, DbError>;

    /// Insert `students` only if the table is empty, checking and inserting
    /// atomically. Returns the number of rows inserted (0 if already populated).
    async fn insert_many_if_empty(&self, students: &[NewStudentRow]) -> Result<u64, DbError>;

    async fn count_students(&self) -> Result<i64, DbError>;
}
