use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use engine::{NewStudent, Student, StudentSummary};

use crate::{AppState, ApiError};

#[derive(Debug, Serialize)]
pub struct StudentListDto {
    pub alunos: Vec<StudentSummary>,
}

/// # GET /alunos
pub async fn list(State(state): State<AppState>) -> Result<Json<StudentListDto>, ApiError> {
    let alunos = state
        .registry
        .list_summaries()
        .await
        .map_err(|e| ApiError::from_engine("Erro ao listar alunos", e))?;
    Ok(Json(StudentListDto { alunos }))
}

/// # GET /alunos/:id
pub async fn get(
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<Student>, ApiError> {
    let student = state
        .registry
        .get(id)
        .await
        .map_err(|e| ApiError::from_engine("Erro ao buscar aluno", e))?;
    Ok(Json(student))
}

/// # POST /alunos
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<NewStudent>, ApiError>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = state
        .registry
        .enroll(payload)
        .await
        .map_err(|e| ApiError::from_engine("Erro ao adicionar aluno", e))?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// # DELETE /alunos/:id
pub async fn delete(
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .registry
        .remove(id)
        .await
        .map_err(|e| ApiError::from_engine("Erro ao remover aluno", e))?;
    Ok(StatusCode::NO_CONTENT)
}
