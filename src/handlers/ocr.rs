//! OCR routes

use std::sync::Arc;
use axum::{extract::State, Json};
use crate::models::{
    OcrProcessApiRequest, OcrProcessApiResponse, OcrTranslateApiRequest, OcrTranslateApiResponse,
    AUTO_LANGUAGE,
};
use crate::services::ocr::decode_image_payload;
use crate::state::AppState;
use super::error::{ApiError, ApiResult};

const DEFAULT_OCR_TARGET: &str = "en";

/// `POST /api/ocr-translate`: image in, placeholder text and its
/// translation out
pub async fn ocr_translate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OcrTranslateApiRequest>,
) -> ApiResult<OcrTranslateApiResponse> {
    let image = body
        .image
        .filter(|image| !image.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing image data. Please provide image."))?;
    let bytes = decode_image_payload(&image)?;

    let source_language = body.source_language.unwrap_or_else(|| AUTO_LANGUAGE.to_string());
    let target_language = body
        .target_language
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_OCR_TARGET.to_string());

    let result = state
        .services
        .ocr
        .recognize_and_translate(&bytes, &source_language, &target_language)
        .await;

    Ok(Json(OcrTranslateApiResponse {
        success: true,
        extracted_text: result.extracted_text,
        translated_text: result.translated_text,
        confidence: result.confidence,
        source_language: result.source_language,
        target_language: result.target_language,
        strategy: result.strategy_used.to_string(),
        words: Vec::new(),
    }))
}

/// `POST /api/ocr-translation/process`: raw OCR text is cleaned up, then
/// translated
pub async fn ocr_process(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OcrProcessApiRequest>,
) -> ApiResult<OcrProcessApiResponse> {
    let raw_text = body
        .image_data
        .filter(|data| !data.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing image data. Please provide imageData."))?;
    let target_language = body
        .target_language
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing targetLanguage."))?;
    let source_language = body.source_language.unwrap_or_else(|| AUTO_LANGUAGE.to_string());

    let processed = state
        .services
        .ocr
        .process_text(&raw_text, &source_language, &target_language)
        .await;

    Ok(Json(OcrProcessApiResponse {
        success: true,
        raw_ocr_text: processed.raw_text,
        cleaned_text: processed.cleaned_text,
        translated_text: processed.translation.translated_text,
        source_language: processed.translation.source_language_used,
        target_language: processed.translation.target_language,
        processing_time_ms: processed.processing_time_ms,
        degraded: processed.translation.degraded,
    }))
}
