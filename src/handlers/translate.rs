//! Translation and status routes

use std::sync::Arc;
use axum::{extract::State, Json};
use crate::models::{
    StatusResponse, Strategy, TranslateApiRequest, TranslateApiResponse, TranslationRequest,
    AUTO_LANGUAGE,
};
use crate::state::AppState;
use super::error::{ApiError, ApiResult};

/// `GET /api/status`
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let health = state.services.health_check();
    let now = chrono::Utc::now();
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        version: crate::VERSION.to_string(),
        remote_configured: health.remote_configured,
        uptime_seconds: (now - state.started_at).num_seconds(),
        timestamp: now,
    })
}

/// `GET /api/test`
pub async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "API is working!" }))
}

/// Text and target language are mandatory on both translate routes
fn translation_request(body: &TranslateApiRequest) -> Result<TranslationRequest, ApiError> {
    match (&body.text, &body.target_language) {
        (Some(text), Some(target)) if !text.is_empty() && !target.trim().is_empty() => {
            let source = body.source_language.as_deref().unwrap_or(AUTO_LANGUAGE);
            Ok(TranslationRequest::new(text.as_str(), source, target.as_str()))
        }
        _ => Err(ApiError::bad_request(
            "Missing required parameters. Please provide text and targetLanguage.",
        )),
    }
}

/// `POST /api/translate`.
///
/// Answers 200 even when the LLM is unreachable; the body is then flagged
/// `fallback: true` and carries the offline translation.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TranslateApiRequest>,
) -> ApiResult<TranslateApiResponse> {
    let request = translation_request(&body)?;
    let result = state.services.resolver.resolve(&request).await;

    Ok(Json(TranslateApiResponse {
        translation: Some(result.translated_text.clone()),
        translated: Some(result.translated_text),
        source_language: Some(result.source_language_used),
        target_language: Some(result.target_language),
        success: true,
        fallback: !result.strategy_used.is_llm(),
        ai_enhanced: None,
        strategy: Some(result.strategy_used.to_string()),
    }))
}

/// `POST /api/translate-text`.
///
/// Asks the secondary backend first when one is configured. Any other
/// strategy winning means the backend was skipped or failed, so the answer
/// is flagged `fallback: true` with `aiEnhanced: false`.
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TranslateApiRequest>,
) -> ApiResult<TranslateApiResponse> {
    let request = translation_request(&body)?;
    let ai_enhance = body.ai_enhance != Some(false);

    let resolver = match &state.services.backend {
        Some(backend) => {
            let backend = backend.clone().with_ai_enhance(ai_enhance);
            state.services.resolver.with_leading(Arc::new(backend))
        }
        None => state.services.resolver.clone(),
    };
    let result = resolver.resolve(&request).await;
    let from_backend = result.strategy_used == Strategy::Proxy;

    Ok(Json(TranslateApiResponse {
        translation: None,
        translated: Some(result.translated_text),
        source_language: Some(result.source_language_used),
        target_language: Some(result.target_language),
        success: true,
        fallback: !from_backend,
        ai_enhanced: Some(from_backend && ai_enhance),
        strategy: Some(result.strategy_used.to_string()),
    }))
}
