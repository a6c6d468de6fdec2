//! Request handlers, one submodule per resource.

pub mod approvals;
pub mod students;

/// # GET /health
pub async fn health() -> &'static str {
    "OK"
}
