// src/server.rs
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::config::Config;
use crate::handlers;

/// Shared request context. Only configuration lives here: scans are
/// request-scoped by design, so there is no cached state to share.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/random-poem", get(handlers::random_poem))
        .route("/api/library", get(handlers::library))
        .route("/api/recent", get(handlers::recent))
        .route("/api/poems/{*path}", get(handlers::poem))
        .route(
            "/api/sort-preference",
            get(handlers::sort_preference).put(handlers::set_sort_preference),
        )
        .with_state(state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let bind = config.bind;
    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %bind, root = %state.config.root.display(), "serving poems");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
