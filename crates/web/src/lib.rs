// Slidebox web server library
// Decision: Shared library for the binary and router tests
// Decision: Configuration and services are built once and passed to handlers
// through AppState; nothing is read from globals at request time

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::get,
    Json, Router,
};
use slidebox_core::FileRepository;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// HTML handlers
pub mod api;

// Sessions and signup/login
pub mod auth;

// Process configuration
pub mod config;

// Services layer
pub mod services;

// Storage layer
pub mod storage;

// Page templates
pub mod views;

use api::HealthResponse;
use auth::SessionService;
use config::AppConfig;
use services::CredentialService;
use storage::StorageBackend;

/// App state shared across routes
#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: Arc<CredentialService>,
    pub sessions: Arc<SessionService>,
    pub files: Arc<dyn FileRepository>,
}

impl AppState {
    pub fn new(config: AppConfig, db: StorageBackend, files: Arc<dyn FileRepository>) -> Self {
        let sessions = SessionService::new(config.session.clone());
        Self {
            config: Arc::new(config),
            credentials: Arc::new(CredentialService::new(Arc::new(db))),
            sessions: Arc::new(sessions),
            files,
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health))
        .merge(api::pages::routes(state.clone()))
        .merge(auth::routes(state.clone()))
        .merge(api::presentations::routes(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
