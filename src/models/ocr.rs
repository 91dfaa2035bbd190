//! OCR-combined translation result

use serde::{Deserialize, Serialize};
use super::translation::{Strategy, TranslationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrTranslationResult {
    pub extracted_text: String,
    pub translated_text: String,
    pub confidence: f32,
    pub source_language: String,
    pub target_language: String,
    pub strategy_used: Strategy,
    pub degraded: bool,
}

impl OcrTranslationResult {
    pub fn from_translation(extracted_text: String, translation: TranslationResult) -> Self {
        let confidence = if translation.strategy_used.is_llm() { 0.95 } else { 0.85 };
        Self {
            extracted_text,
            translated_text: translation.translated_text,
            confidence,
            source_language: translation.source_language_used,
            target_language: translation.target_language,
            strategy_used: translation.strategy_used,
            degraded: translation.degraded,
        }
    }
}
