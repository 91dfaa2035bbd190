//! Router assembly

use std::sync::Arc;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use crate::middleware::logging::log_requests;
use crate::state::AppState;
use super::{generate, ocr, translate};

/// Images arrive base64-encoded inside JSON
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// All `/api` routes with CORS and request logging
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(translate::status))
        .route("/api/test", get(translate::ping))
        .route("/api/translate", post(translate::translate))
        .route("/api/translate-text", post(translate::translate_text))
        .route("/api/ocr-translate", post(ocr::ocr_translate))
        .route("/api/ocr-translation/process", post(ocr::ocr_process))
        .route("/api/generate", post(generate::generate))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
