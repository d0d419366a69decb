pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::PlagcheckConfig;
use crate::errors::PlagiarismError;
use crate::similarity::Detector;

#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<Detector>,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(detector: Detector) -> Self {
        let server = crate::config::ServerConfig::default();
        Self {
            detector: Arc::new(detector),
            request_timeout: Duration::from_secs(server.request_timeout_secs),
            max_body_bytes: server.max_body_bytes,
        }
    }
}

/// Load stopwords and build the detector. Fails before anything is served.
pub fn create_app_state(config: &PlagcheckConfig) -> Result<AppState, PlagiarismError> {
    let detector = crate::config::build_detector(&config.detection())?;
    let server = config.server();
    Ok(AppState {
        detector: Arc::new(detector),
        request_timeout: Duration::from_secs(server.request_timeout_secs),
        max_body_bytes: server.max_body_bytes,
    })
}

pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/plagiarism/possibility", post(routes::plagiarism::possibility))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
