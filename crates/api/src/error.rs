use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use engine::EngineError;

/// Handler-boundary error. Every variant renders as `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// The request body could not be read as the expected JSON.
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    /// A path segment did not parse, e.g. a non-numeric id.
    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),

    /// Storage failure; `context` names the operation that was attempted.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: EngineError,
    },
}

impl ApiError {
    /// Classify an engine error raised while performing `context`.
    pub fn from_engine(context: &'static str, err: EngineError) -> Self {
        match err {
            EngineError::NotFound(id) => Self::NotFound(format!("Aluno {id} não encontrado")),
            EngineError::InvalidStudent(msg) => Self::Validation(msg),
            other => Self::Internal { context, source: other },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Body(rejection) => rejection.status(),
            Self::Path(rejection) => rejection.status(),
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts `ApiError` into an HTTP response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal { context, source } = &self {
            tracing::error!(error = ?source, context, "request failed");
        }

        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
