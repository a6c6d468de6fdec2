//! Core domain models for student records.
//!
//! The JSON field names (`nome`, `faltas`, `n1`, `n2`, `aprovado`) are part of
//! the public HTTP contract; Rust-side names are English.  Grades travel as
//! JSON numbers and are held as `Decimal` in memory.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use db::models::{NewStudentRow, StudentRow};

use crate::{approval::{self, ApprovalStatus}, EngineError};

/// Longest accepted name, matching the `VARCHAR(100)` column.
pub const MAX_NAME_LEN: usize = 100;

/// Highest accepted grade.
pub const MAX_GRADE: Decimal = dec!(10);

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "faltas")]
    pub absences: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub n1: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub n2: Decimal,
    /// Stored approval flag; refreshed by `StudentRegistry::evaluate_all`.
    #[serde(rename = "aprovado")]
    pub approved: bool,
}

impl Student {
    pub fn status(&self) -> ApprovalStatus {
        ApprovalStatus::from(self.approved)
    }

    /// What the flag *should* be given the current absences and grades.
    pub fn meets_approval_rule(&self) -> bool {
        approval::is_approved(self.absences, self.n1, self.n2)
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.nome,
            absences: row.faltas,
            n1: row.n1,
            n2: row.n2,
            approved: row.aprovado_sn,
        }
    }
}

// ---------------------------------------------------------------------------
// StudentSummary
// ---------------------------------------------------------------------------

/// Name and status, as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    #[serde(rename = "nome")]
    pub name: String,
    pub status: ApprovalStatus,
}

impl From<Student> for StudentSummary {
    fn from(student: Student) -> Self {
        let status = student.status();
        Self { name: student.name, status }
    }
}

// ---------------------------------------------------------------------------
// NewStudent
// ---------------------------------------------------------------------------

/// Payload for enrolling a student. Omitted numeric fields default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "faltas", default)]
    pub absences: i32,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub n1: Decimal,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub n2: Decimal,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, absences: i32, n1: Decimal, n2: Decimal) -> Self {
        Self { name: name.into(), absences, n1, n2 }
    }

    /// Check the payload against the column constraints.
    ///
    /// # Errors
    /// [`EngineError::InvalidStudent`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidStudent("nome must not be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(EngineError::InvalidStudent(format!(
                "nome must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if self.absences < 0 {
            return Err(EngineError::InvalidStudent("faltas must not be negative".into()));
        }
        for (field, grade) in [("n1", self.n1), ("n2", self.n2)] {
            if grade < Decimal::ZERO || grade > MAX_GRADE {
                return Err(EngineError::InvalidStudent(format!(
                    "{field} must be between 0 and {MAX_GRADE}"
                )));
            }
            if grade.normalize().scale() > 2 {
                return Err(EngineError::InvalidStudent(format!(
                    "{field} must have at most two decimal places"
                )));
            }
        }
        Ok(())
    }

    /// Build the row to insert, with the approval flag already computed.
    pub(crate) fn into_row(self) -> NewStudentRow {
        let aprovado_sn = approval::is_approved(self.absences, self.n1, self.n2);
        NewStudentRow {
            nome: self.name.trim().to_owned(),
            faltas: self.absences,
            n1: self.n1,
            n2: self.n2,
            aprovado_sn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_serialises_with_wire_names_and_numeric_grades() {
        let student = Student {
            id: 1,
            name: "João Silva".into(),
            absences: 10,
            n1: dec!(7.50),
            n2: dec!(8.00),
            approved: true,
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "nome": "João Silva", "faltas": 10, "n1": 7.5, "n2": 8.0, "aprovado": true })
        );
    }

    #[test]
    fn new_student_defaults_missing_numbers_to_zero() {
        let parsed: NewStudent = serde_json::from_value(json!({ "nome": "Ana" })).unwrap();
        assert_eq!(parsed, NewStudent::new("Ana", 0, Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn validation_rejects_bad_fields() {
        let cases = [
            NewStudent::new("   ", 0, dec!(5), dec!(5)),
            NewStudent::new("x".repeat(MAX_NAME_LEN + 1), 0, dec!(5), dec!(5)),
            NewStudent::new("Ana", -1, dec!(5), dec!(5)),
            NewStudent::new("Ana", 0, dec!(-0.5), dec!(5)),
            NewStudent::new("Ana", 0, dec!(5), dec!(10.01)),
            NewStudent::new("Ana", 0, dec!(5.125), dec!(5)),
        ];
        for case in cases {
            assert!(
                matches!(case.validate(), Err(EngineError::InvalidStudent(_))),
                "expected rejection for {case:?}"
            );
        }
    }

    #[test]
    fn validation_accepts_boundaries() {
        NewStudent::new("x".repeat(MAX_NAME_LEN), 0, dec!(0), dec!(10)).validate().unwrap();
        NewStudent::new("Ana", 0, dec!(6.50), dec!(9.25)).validate().unwrap();
    }

    #[test]
    fn row_carries_computed_flag_and_trimmed_name() {
        let row = NewStudent::new("  Pedro Santos ", 25, dec!(4.0), dec!(5.5)).into_row();
        assert_eq!(row.nome, "Pedro Santos");
        assert!(!row.aprovado_sn);

        let row = NewStudent::new("Ana Costa", 18, dec!(6.0), dec!(6.5)).into_row();
        assert!(row.aprovado_sn);
    }
}
