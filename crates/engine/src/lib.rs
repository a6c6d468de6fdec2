//! `engine` crate — student domain models, the approval rule, and the
//! registry service that drives the `db` crate.

pub mod models;
pub mod error;
pub mod approval;
pub mod registry;
pub mod seed;

pub use models::{Student, NewStudent, StudentSummary};
pub use error::EngineError;
pub use approval::{is_approved, ApprovalStatus};
pub use registry::{StudentRegistry, EvaluationSummary};
