//! The translation strategy seam
//!
//! Every way of producing a translation implements [`TranslationStrategy`].
//! The resolver holds an ordered list of them and stops at the first success.

use std::time::Duration;
use async_trait::async_trait;
use crate::models::{Strategy, TranslationRequest};
use crate::utils::errors::StrategyOutcome;

#[async_trait]
pub trait TranslationStrategy: Send + Sync {
    /// Tag recorded in the result when this strategy wins
    fn kind(&self) -> Strategy;

    /// Attempt a translation. Failures are reported, never raised.
    async fn translate(&self, request: &TranslationRequest) -> StrategyOutcome;

    /// Upper bound on one attempt; `None` for local strategies
    fn timeout(&self) -> Option<Duration> {
        None
    }
}
