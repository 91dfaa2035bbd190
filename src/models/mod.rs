//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod api;
pub mod ocr;
pub mod translation;

// Re-export commonly used models
pub use api::{
    ChatMessage, GenerateApiRequest, OcrProcessApiRequest, OcrProcessApiResponse,
    OcrTranslateApiRequest, OcrTranslateApiResponse, StatusResponse, TranslateApiRequest,
    TranslateApiResponse,
};
pub use ocr::OcrTranslationResult;
pub use translation::{Strategy, Translated, TranslationRequest, TranslationResult, AUTO_LANGUAGE};
