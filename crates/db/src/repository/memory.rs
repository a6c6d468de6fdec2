//! `MemoryStudentStore` — an in-process [`StudentStore`].
//!
//! Useful in unit and integration tests where a Postgres instance is either
//! unavailable or irrelevant.  Ids are assigned sequentially from 1, the same
//! way a fresh `SERIAL` column would.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::StudentStore;
use crate::{DbError, models::{NewStudentRow, StudentRow}};

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, StudentRow>,
}

/// Thread-safe in-memory table. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStudentStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `rows`, in order.
    pub fn with_rows(rows: impl IntoIterator<Item = NewStudentRow>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            for row in rows {
                inner.next_id += 1;
                let id = inner.next_id;
                inner.rows.insert(id, row.with_id(id));
            }
        }
        store
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list_students(&self) -> Result<Vec<StudentRow>, DbError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get_student(&self, id: i32) -> Result<StudentRow, DbError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn insert_student(&self, student: &NewStudentRow) -> Result<StudentRow, DbError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let row = student.clone().with_id(inner.next_id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn delete_student(&self, id: i32) -> Result<(), DbError> {
        match self.inner.lock().unwrap().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound),
        }
    }

    async fn set_approvals(&self, updates: &[(i32, bool)]) -> Result<u64, DbError> {
        let mut inner = self.inner.lock().unwrap();
        let mut updated = 0;
        for &(id, approved) in updates {
            if let Some(row) = inner.rows.get_mut(&id) {
                row.aprovado_sn = approved;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn insert_many_if_empty(&self, students: &[NewStudentRow]) -> Result<u64, DbError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.rows.is_empty() {
            return Ok(0);
        }
        for student in students {
            inner.next_id += 1;
            let id = inner.next_id;
            inner.rows.insert(id, student.clone().with_id(id));
        }
        Ok(students.len() as u64)
    }

    async fn count_students(&self) -> Result<i64, DbError> {
        Ok(self.inner.lock().unwrap().rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(nome: &str) -> NewStudentRow {
        NewStudentRow {
            nome: nome.into(),
            faltas: 0,
            n1: dec!(7.0),
            n2: dec!(7.0),
            aprovado_sn: false,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let store = MemoryStudentStore::new();
        let a = store.insert_student(&row("a")).await.unwrap();
        let b = store.insert_student(&row("b")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete_student(b.id).await.unwrap();
        let c = store.insert_student(&row("c")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn missing_rows_report_not_found() {
        let store = MemoryStudentStore::new();
        assert!(matches!(store.get_student(7).await, Err(DbError::NotFound)));
        assert!(matches!(store.delete_student(7).await, Err(DbError::NotFound)));
    }

    #[tokio::test]
    async fn set_approvals_skips_unknown_ids() {
        let store = MemoryStudentStore::with_rows([row("a"), row("b")]);
        let updated = store
            .set_approvals(&[(1, true), (2, true), (99, true)])
            .await
            .unwrap();
        assert_eq!(updated, 2);

        let rows = store.list_students().await.unwrap();
        assert!(rows.iter().all(|r| r.aprovado_sn));
        assert_eq!(store.count_students().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn set_approvals_with_no_updates_changes_nothing() {
        let store = MemoryStudentStore::with_rows([row("a")]);
        assert_eq!(store.set_approvals(&[]).await.unwrap(), 0);
        assert!(!store.get_student(1).await.unwrap().aprovado_sn);
    }

    #[tokio::test]
    async fn insert_many_only_fills_an_empty_table() {
        let store = MemoryStudentStore::new();
        assert_eq!(store.insert_many_if_empty(&[row("a"), row("b")]).await.unwrap(), 2);
        assert_eq!(store.insert_many_if_empty(&[row("c")]).await.unwrap(), 0);

        let names: Vec<String> = store
            .list_students()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.nome)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
