//! The pass/fail rule.
//!
//! A student is approved when they missed fewer than [`MAX_ABSENCES`] classes
//! *and* the mean of their two grades is at least [`PASSING_AVERAGE`].  Grades
//! are `Decimal`, so an average of exactly 6.00 passes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound on absences for approval.
pub const MAX_ABSENCES: i32 = 20;

/// Minimum average of N1 and N2 for approval.
pub const PASSING_AVERAGE: Decimal = dec!(6.0);

/// Arithmetic mean of the two grades.
pub fn average(n1: Decimal, n2: Decimal) -> Decimal {
    (n1 + n2) / dec!(2)
}

/// Apply the approval rule.
pub fn is_approved(absences: i32, n1: Decimal, n2: Decimal) -> bool {
    absences < MAX_ABSENCES && average(n1, n2) >= PASSING_AVERAGE
}

/// Status label as exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalStatus {
    Aprovado,
    Reprovado,
}

impl From<bool> for ApprovalStatus {
    fn from(approved: bool) -> Self {
        if approved { Self::Aprovado } else { Self::Reprovado }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aprovado  => write!(f, "APROVADO"),
            Self::Reprovado => write!(f, "REPROVADO"),
        }
    }
}
