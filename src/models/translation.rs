//! Translation request and result models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source language tag meaning "let the translator detect it"
pub const AUTO_LANGUAGE: &str = "auto";

/// One translation attempt, built per call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    pub target_language: String,
}

fn default_source_language() -> String {
    AUTO_LANGUAGE.to_string()
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        let source_language = source_language.into();
        Self {
            text: text.into(),
            source_language: if source_language.trim().is_empty() {
                default_source_language()
            } else {
                source_language
            },
            target_language: target_language.into(),
        }
    }

    /// Request with an auto-detected source language
    pub fn auto(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self::new(text, AUTO_LANGUAGE, target_language)
    }

    pub fn is_auto_source(&self) -> bool {
        self.source_language == AUTO_LANGUAGE
    }
}

/// Which strategy produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Remote,
    Proxy,
    Dictionary,
    Generated,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Remote => "remote",
            Strategy::Proxy => "proxy",
            Strategy::Dictionary => "dictionary",
            Strategy::Generated => "generated",
        }
    }

    /// Whether this strategy represents a genuine LLM translation
    pub fn is_llm(&self) -> bool {
        matches!(self, Strategy::Remote | Strategy::Proxy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text produced by one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    /// Only part of the input was actually translated
    pub degraded: bool,
}

impl Translated {
    pub fn full(text: impl Into<String>) -> Self {
        Self { text: text.into(), degraded: false }
    }

    pub fn partial(text: impl Into<String>) -> Self {
        Self { text: text.into(), degraded: true }
    }
}

/// Outcome of resolving a [`TranslationRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    pub source_language_used: String,
    pub target_language: String,
    pub strategy_used: Strategy,
    pub degraded: bool,
}

impl TranslationResult {
    /// Result for empty input; no strategy ran
    pub fn from_translated(
        request: &TranslationRequest,
        strategy: Strategy,
        translated: Translated,
    ) -> Self {
        Self {
            translated_text: translated.text,
            source_language_used: request.source_language.clone(),
            target_language: request.target_language.clone(),
            strategy_used: strategy,
            degraded: translated.degraded,
        }
    }

    pub fn empty(request: &TranslationRequest) -> Self {
        Self {
            translated_text: String::new(),
            source_language_used: request.source_language.clone(),
            target_language: request.target_language.clone(),
            strategy_used: Strategy::Generated,
            degraded: false,
        }
    }
}
