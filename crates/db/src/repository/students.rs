//! Postgres-backed student CRUD operations.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::StudentStore;
use crate::{DbError, models::{NewStudentRow, StudentRow}};

/// [`StudentStore`] over a shared Postgres pool.
///
/// Queries are checked at runtime so the crate builds without a live
/// database.
#[derive(Debug, Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list_students(&self) -> Result<Vec<StudentRow>, DbError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"SELECT id, nome, faltas, n1, n2, aprovado_sn FROM tb_alunos ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_student(&self, id: i32) -> Result<StudentRow, DbError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"SELECT id, nome, faltas, n1, n2, aprovado_sn FROM tb_alunos WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(row)
    }

    async fn insert_student(&self, student: &NewStudentRow) -> Result<StudentRow, DbError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO tb_alunos (nome, faltas, n1, n2, aprovado_sn)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nome, faltas, n1, n2, aprovado_sn
            "#,
        )
        .bind(&student.nome)
        .bind(student.faltas)
        .bind(student.n1)
        .bind(student.n2)
        .bind(student.aprovado_sn)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_student(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM tb_alunos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }

    async fn set_approvals(&self, updates: &[(i32, bool)]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let mut updated = 0;

        for &(id, approved) in updates {
            let result = sqlx::query("UPDATE tb_alunos SET aprovado_sn = $1 WHERE id = $2")
                .bind(approved)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            updated += result.rows_affected();
        }

        tx.commit().await?;
        debug!(requested = updates.len(), updated, "approval flags written");

        Ok(updated)
    }

    async fn insert_many_if_empty(&self, students: &[NewStudentRow]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        // Self-conflicting mode: a second server seeding at the same time
        // waits here and then sees the committed rows.
        sqlx::query("LOCK TABLE tb_alunos IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_alunos")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.rollback().await?;
            return Ok(0);
        }

        for student in students {
            sqlx::query(
                "INSERT INTO tb_alunos (nome, faltas, n1, n2, aprovado_sn) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&student.nome)
            .bind(student.faltas)
            .bind(student.n1)
            .bind(student.n2)
            .bind(student.aprovado_sn)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(students.len() as u64)
    }

    async fn count_students(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_alunos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
