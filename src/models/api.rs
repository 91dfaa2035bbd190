//! Wire types of the proxy routes
//!
//! Shared by the axum handlers and by the proxy strategy that calls them.

use serde::{Deserialize, Serialize};

/// `POST /api/translate` and `/api/translate-text` body.
///
/// `ai_enhance` is only meaningful to the secondary backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateApiRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_enhance: Option<bool>,
}

/// `POST /api/translate` response.
///
/// `translation` and `translated` carry the same text for older clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default)]
    pub translated: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_enhanced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl TranslateApiResponse {
    /// The translated text under either field name
    pub fn text(&self) -> Option<&str> {
        self.translation
            .as_deref()
            .or(self.translated.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// `POST /api/ocr-translate` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrTranslateApiRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// `POST /api/ocr-translate` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrTranslateApiResponse {
    pub success: bool,
    pub extracted_text: String,
    pub translated_text: String,
    pub confidence: f32,
    pub source_language: String,
    pub target_language: String,
    pub strategy: String,
    pub words: Vec<serde_json::Value>,
}

/// `POST /api/ocr-translation/process` body; `image_data` is raw OCR text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrProcessApiRequest {
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// `POST /api/ocr-translation/process` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrProcessApiResponse {
    pub success: bool,
    pub raw_ocr_text: String,
    pub cleaned_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub processing_time_ms: u64,
    pub degraded: bool,
}

/// A chat message as sent to the completion API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// `POST /api/generate` body: either a bare prompt or structured messages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateApiRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub top_p: Option<f32>,
}

/// `GET /api/status` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub remote_configured: bool,
    pub uptime_seconds: i64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
