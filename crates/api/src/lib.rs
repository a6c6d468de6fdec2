//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /alunos
//!   POST   /alunos
//!   GET    /alunos/{id}
//!   DELETE /alunos/{id}
//!   POST   /aprovar-alunos
//!   GET    /health

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use engine::StudentRegistry;

pub mod error;
pub mod handlers;

pub use error::ApiError;


/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: StudentRegistry,
}

impl AppState {
    pub fn new(registry: StudentRegistry) -> Self {
        Self { registry }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/alunos",
            get(handlers::students::list).post(handlers::students::create),
        )
        .route(
            "/alunos/:id",
            get(handlers::students::get).delete(handlers::students::delete),
        )
        .route("/aprovar-alunos", post(handlers::approvals::approve_all))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process receives Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
