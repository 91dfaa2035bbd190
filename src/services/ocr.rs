//! OCR stand-in and OCR text post-processing
//!
//! There is no real text recognition. An image is mapped to one of a few
//! travel phrases by hashing the start of its payload, so the same picture
//! always reads the same way.

use std::sync::Arc;
use std::time::Instant;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};
use crate::models::{ChatMessage, OcrTranslationResult, TranslationRequest, TranslationResult};
use crate::utils::errors::{Result, VoxifyError};
use crate::utils::helpers::{clean_llm_output, hash_bytes, normalize_whitespace};
use super::groq::{GroqClient, Sampling};
use super::resolver::TranslationResolver;

/// Phrases the placeholder recognizer can "read"
pub const PLACEHOLDER_PHRASES: [&str; 7] = [
    "Hello, How are You?",
    "Good morning",
    "Thank you",
    "Where is the bathroom?",
    "How much does this cost?",
    "I need help",
    "Excuse me",
];

/// Only this much of the payload feeds the hash
const HASH_SAMPLE_LEN: usize = 100;

const OCR_SYSTEM_PROMPT: &str = concat!(
    "You are an OCR post-processor. Your job is to clean and correct messy OCR output ",
    "from images before it is used for translation."
);

const OCR_CLEANUP_INSTRUCTIONS: &str = concat!(
    "Please fix spelling, correct broken words, and return clean, readable text. ",
    "Do not translate or change meaning. Just fix formatting and errors caused by OCR."
);

const OCR_CLEANUP_TEMPERATURE: f32 = 0.2;

/// Pick the placeholder phrase for an image payload
pub fn extract_placeholder(image: &[u8]) -> &'static str {
    let sample = &image[..image.len().min(HASH_SAMPLE_LEN)];
    let index = hash_bytes(sample).unsigned_abs() as usize % PLACEHOLDER_PHRASES.len();
    PLACEHOLDER_PHRASES[index]
}

/// Decode an image given as a `data:` URL or as bare base64
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>> {
    let trimmed = payload.trim();
    let encoded = match trimmed.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| {
                VoxifyError::InvalidInput("image data URL is not base64 encoded".to_string())
            })?,
        None => trimmed,
    };

    if encoded.is_empty() {
        return Err(VoxifyError::InvalidInput("image payload is empty".to_string()));
    }

    STANDARD
        .decode(encoded)
        .map_err(|e| VoxifyError::InvalidInput(format!("image payload is not valid base64: {}", e)))
}

/// Result of cleaning and translating raw OCR text
#[derive(Debug, Clone)]
pub struct ProcessedOcrText {
    pub raw_text: String,
    pub cleaned_text: String,
    pub translation: TranslationResult,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone)]
pub struct OcrService {
    resolver: TranslationResolver,
    groq: Option<Arc<GroqClient>>,
}

impl OcrService {
    /// `groq` is used for text cleanup; without it cleanup is local only
    pub fn new(resolver: TranslationResolver, groq: Option<Arc<GroqClient>>) -> Self {
        Self { resolver, groq }
    }

    /// "Recognize" text in an image and translate it
    pub async fn recognize_and_translate(
        &self,
        image: &[u8],
        source_language: &str,
        target_language: &str,
    ) -> OcrTranslationResult {
        let extracted = extract_placeholder(image);
        debug!(bytes = image.len(), extracted = extracted, "Placeholder OCR result");

        let translation = self
            .resolver
            .resolve(&TranslationRequest::new(extracted, source_language, target_language))
            .await;

        OcrTranslationResult::from_translation(extracted.to_string(), translation)
    }

    /// Fix OCR artefacts with the LLM. Falls back to whitespace
    /// normalisation when the LLM is unavailable.
    pub async fn clean_ocr_text(&self, raw: &str) -> String {
        let fallback = || normalize_whitespace(raw);

        let Some(groq) = self.groq.as_ref() else {
            return fallback();
        };

        let messages = [
            ChatMessage::system(OCR_SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Here is the raw OCR text extracted from an image:\n\n\"{}\"\n\n{}",
                raw, OCR_CLEANUP_INSTRUCTIONS
            )),
        ];
        let sampling: Sampling = groq.sampling().clone().with_temperature(OCR_CLEANUP_TEMPERATURE);

        let outcome =
            tokio::time::timeout(groq.timeout(), groq.complete(&messages, &sampling)).await;
        match outcome {
            Ok(Ok(text)) => {
                let cleaned = clean_llm_output(&text);
                if cleaned.is_empty() {
                    fallback()
                } else {
                    cleaned
                }
            }
            Ok(Err(reason)) => {
                warn!(reason = %reason, "OCR cleanup failed, using raw text");
                fallback()
            }
            Err(_) => {
                warn!("OCR cleanup timed out, using raw text");
                fallback()
            }
        }
    }

    /// Clean raw OCR text, then translate it
    pub async fn process_text(
        &self,
        raw: &str,
        source_language: &str,
        target_language: &str,
    ) -> ProcessedOcrText {
        let started = Instant::now();

        let cleaned_text = self.clean_ocr_text(raw).await;
        let translation = self
            .resolver
            .resolve(&TranslationRequest::new(
                cleaned_text.clone(),
                source_language,
                target_language,
            ))
            .await;

        ProcessedOcrText {
            raw_text: raw.to_string(),
            cleaned_text,
            translation,
            processing_time_ms: started.elapsed().as_millis() as u64,
        }
    }
}
