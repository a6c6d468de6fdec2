//! Sample roster inserted into an empty table on first start.
//!
//! Rows go in with `aprovado_sn = false`; they read as `REPROVADO` until
//! `StudentRegistry::evaluate_all` runs.

use db::models::NewStudentRow;
use rust_decimal_macros::dec;

use crate::NewStudent;

/// The four demonstration students.
pub fn sample_students() -> Vec<NewStudent> {
    vec![
        NewStudent::new("João Silva", 10, dec!(7.5), dec!(8.0)),
        NewStudent::new("Maria Oliveira", 5, dec!(9.0), dec!(8.5)),
        NewStudent::new("Pedro Santos", 25, dec!(4.0), dec!(5.5)),
        NewStudent::new("Ana Costa", 18, dec!(6.0), dec!(6.5)),
    ]
}

/// Sample students as rows, approval not yet evaluated.
pub(crate) fn sample_rows() -> Vec<NewStudentRow> {
    sample_students()
        .into_iter()
        .map(|student| NewStudentRow {
            aprovado_sn: false,
            ..student.into_row()
        })
        .collect()
}
