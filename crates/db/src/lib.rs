//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, and the [`StudentStore`]
//! abstraction over the `tb_alunos` table.  No business logic lives here:
//! the approval rule is computed by the `engine` crate and handed down as a
//! plain boolean.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use repository::{StudentStore, PgStudentStore, MemoryStudentStore};
