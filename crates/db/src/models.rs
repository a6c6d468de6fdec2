//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `engine` crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// tb_alunos
// ---------------------------------------------------------------------------

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StudentRow {
    pub id: i32,
    pub nome: String,
    pub faltas: i32,
    /// `NUMERIC(5,2)`
    pub n1: Decimal,
    /// `NUMERIC(5,2)`
    pub n2: Decimal,
    pub aprovado_sn: bool,
}

/// Column values for an `INSERT`; `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudentRow {
    pub nome: String,
    pub faltas: i32,
    pub n1: Decimal,
    pub n2: Decimal,
    pub aprovado_sn: bool,
}

impl NewStudentRow {
    /// Attach a primary key, producing the row as it would be read back.
    pub fn with_id(self, id: i32) -> StudentRow {
        StudentRow {
            id,
            nome: self.nome,
            faltas: self.faltas,
            n1: self.n1,
            n2: self.n2,
            aprovado_sn: self.aprovado_sn,
        }
    }
}
