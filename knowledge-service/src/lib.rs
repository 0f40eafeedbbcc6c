pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::KnowledgeConfig;
use crate::services::providers::TextProvider;
use crate::services::KnowledgeCurator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: KnowledgeConfig,
    pub curator: Arc<KnowledgeCurator>,
    pub provider: Arc<dyn TextProvider>,
}

/// Build the service router.
///
/// The relay endpoint is called directly from browser front ends on
/// arbitrary domains, hence the wide-open CORS layer.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(handlers::knowledge::generate_knowledge))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
