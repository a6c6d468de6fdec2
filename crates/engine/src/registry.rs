//! Student registry service.
//!
//! `StudentRegistry` is the single entry point the HTTP layer and the CLI use:
//! 1. Validates create payloads and computes the approval flag before insert.
//! 2. Maps persistence rows to domain [`Student`]s.
//! 3. Re-evaluates every stored flag in one transaction (`evaluate_all`).
//! 4. Translates `DbError::NotFound` into [`EngineError::NotFound`] with the id.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use db::{DbError, StudentStore};

use crate::{seed, EngineError, NewStudent, Student, StudentSummary};

// ---------------------------------------------------------------------------
// Output of a bulk evaluation
// ---------------------------------------------------------------------------

/// Counts produced by [`StudentRegistry::evaluate_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    #[serde(rename = "avaliados")]
    pub evaluated: usize,
    #[serde(rename = "aprovados")]
    pub approved: usize,
    #[serde(rename = "reprovados")]
    pub rejected: usize,
}

// ---------------------------------------------------------------------------
// StudentRegistry
// ---------------------------------------------------------------------------

/// Cheap-to-clone handle over a shared [`StudentStore`].
#[derive(Clone)]
pub struct StudentRegistry {
    store: Arc<dyn StudentStore>,
}

impl StudentRegistry {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Every student's name and stored status, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_summaries(&self) -> Result<Vec<StudentSummary>, EngineError> {
        let rows = self.store.list_students().await?;
        Ok(rows
            .into_iter()
            .map(|row| StudentSummary::from(Student::from(row)))
            .collect())
    }

    /// Fetch one student.
    ///
    /// # Errors
    /// [`EngineError::NotFound`] if no student has this id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Student, EngineError> {
        let row = self.store.get_student(id).await.map_err(|e| not_found(e, id))?;
        Ok(row.into())
    }

    /// Validate and insert a new student with its approval flag computed.
    #[instrument(skip(self, student), fields(nome = %student.name))]
    pub async fn enroll(&self, student: NewStudent) -> Result<Student, EngineError> {
        student.validate()?;
        let row = self.store.insert_student(&student.into_row()).await?;
        info!(id = row.id, aprovado = row.aprovado_sn, "student enrolled");
        Ok(row.into())
    }

    /// Delete a student.
    ///
    /// # Errors
    /// [`EngineError::NotFound`] if no row was deleted.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> Result<(), EngineError> {
        self.store.delete_student(id).await.map_err(|e| not_found(e, id))?;
        info!(id, "student removed");
        Ok(())
    }

    /// Recompute the approval flag of every student and persist the result.
    #[instrument(skip(self))]
    pub async fn evaluate_all(&self) -> Result<EvaluationSummary, EngineError> {
        let students: Vec<Student> = self
            .store
            .list_students()
            .await?
            .into_iter()
            .map(Student::from)
            .collect();

        let updates: Vec<(i32, bool)> = students
            .iter()
            .map(|s| (s.id, s.meets_approval_rule()))
            .collect();

        self.store.set_approvals(&updates).await?;

        let approved = updates.iter().filter(|(_, ok)| *ok).count();
        let summary = EvaluationSummary {
            evaluated: updates.len(),
            approved,
            rejected: updates.len() - approved,
        };
        info!(
            evaluated = summary.evaluated,
            approved = summary.approved,
            rejected = summary.rejected,
            "approval status refreshed"
        );
        Ok(summary)
    }

    /// Insert the sample roster if the table is empty; returns rows inserted.
    ///
    /// The emptiness check and the inserts happen atomically in the store.
    #[instrument(skip(self))]
    pub async fn seed_if_empty(&self) -> Result<usize, EngineError> {
        let inserted = self.store.insert_many_if_empty(&seed::sample_rows()).await? as usize;
        if inserted > 0 {
            info!(count = inserted, "sample students inserted");
        }
        Ok(inserted)
    }
}

fn not_found(err: DbError, id: i32) -> EngineError {
    match err {
        DbError::NotFound => EngineError::NotFound(id),
        other => EngineError::Database(other),
    }
}
