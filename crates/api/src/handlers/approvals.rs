use axum::{extract::State, Json};
use serde::Serialize;

use engine::EvaluationSummary;

use crate::{AppState, ApiError};

pub const APPROVAL_UPDATED: &str = "Status de aprovação atualizado com sucesso!";

#[derive(Debug, Serialize)]
pub struct ApprovalResponseDto {
    pub message: &'static str,
    #[serde(flatten)]
    pub summary: EvaluationSummary,
}

/// # POST /aprovar-alunos
/// Recomputes every student's approval flag from absences and grades.
pub async fn approve_all(
    State(state): State<AppState>,
) -> Result<Json<ApprovalResponseDto>, ApiError> {
    let summary = state
        .registry
        .evaluate_all()
        .await
        .map_err(|e| ApiError::from_engine("Erro ao aprovar alunos", e))?;
    Ok(Json(ApprovalResponseDto { message: APPROVAL_UPDATED, summary }))
}
