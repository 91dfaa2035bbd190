//! Offline phrase dictionary strategy

use std::sync::Arc;
use async_trait::async_trait;
use tracing::warn;
use crate::i18n::{DictionaryMatch, PhraseDictionary};
use crate::models::{Strategy, Translated, TranslationRequest};
use crate::utils::errors::{FailureReason, StrategyOutcome};
use super::strategy::TranslationStrategy;

/// Inputs longer than this are matched on the blocking pool
const INLINE_LOOKUP_BYTES: usize = 4 * 1024;

#[derive(Debug, Clone)]
pub struct DictionaryStrategy {
    dictionary: Arc<PhraseDictionary>,
}

impl DictionaryStrategy {
    pub fn new(dictionary: Arc<PhraseDictionary>) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl TranslationStrategy for DictionaryStrategy {
    fn kind(&self) -> Strategy {
        Strategy::Dictionary
    }

    async fn translate(&self, request: &TranslationRequest) -> StrategyOutcome {
        if !self.dictionary.has_language(&request.target_language) {
            return Err(FailureReason::Unsupported(request.target_language.clone()));
        }

        let found = if request.text.len() <= INLINE_LOOKUP_BYTES {
            self.dictionary.lookup(&request.target_language, &request.text)
        } else {
            let dictionary = self.dictionary.clone();
            let target = request.target_language.clone();
            let text = request.text.clone();
            match tokio::task::spawn_blocking(move || dictionary.lookup(&target, &text)).await {
                Ok(found) => found,
                Err(e) => {
                    warn!(error = %e, "Dictionary lookup task failed");
                    None
                }
            }
        };

        match found {
            Some(DictionaryMatch::Exact(text)) => Ok(Translated::full(text)),
            Some(found) => {
                let degraded = found.is_degraded();
                Ok(Translated {
                    text: found.text().to_string(),
                    degraded,
                })
            }
            None => Err(FailureReason::NoMatch),
        }
    }
}
