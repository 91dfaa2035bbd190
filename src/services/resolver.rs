//! Translation resolver
//!
//! Tries an ordered list of strategies and returns the first success. The
//! resolver is total: every request yields a [`TranslationResult`], and for
//! non-empty input the translated text is never empty.
//!
//! Default order is remote LLM, proxy (only when configured), phrase
//! dictionary, then the deterministic generator.

use std::sync::Arc;
use tracing::debug;
use crate::i18n::PhraseDictionary;
use crate::models::{Strategy, TranslationRequest, TranslationResult};
use crate::utils::errors::{FailureReason, StrategyOutcome};
use crate::utils::logging::{log_resolution, log_strategy_attempt, log_strategy_failure};
use super::dictionary::DictionaryStrategy;
use super::generator::MockGenerator;
use super::groq::{GroqClient, RemoteStrategy};
use super::proxy::ProxyStrategy;
use super::strategy::TranslationStrategy;

#[derive(Clone)]
pub struct TranslationResolver {
    strategies: Vec<Arc<dyn TranslationStrategy>>,
    generator: MockGenerator,
}

impl std::fmt::Debug for TranslationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationResolver")
            .field("strategies", &self.strategy_kinds())
            .finish()
    }
}

impl TranslationResolver {
    pub fn builder() -> TranslationResolverBuilder {
        TranslationResolverBuilder::default()
    }

    /// Dictionary then generator; never touches the network
    pub fn offline(dictionary: Arc<PhraseDictionary>) -> Self {
        Self::builder().dictionary(dictionary).generator().build()
    }

    /// A copy of this chain with `strategy` tried before everything else
    pub fn with_leading(&self, strategy: Arc<dyn TranslationStrategy>) -> Self {
        let mut strategies = Vec::with_capacity(self.strategies.len() + 1);
        strategies.push(strategy);
        strategies.extend(self.strategies.iter().cloned());
        Self {
            strategies,
            generator: self.generator.clone(),
        }
    }

    /// Order in which strategies are attempted
    pub fn strategy_kinds(&self) -> Vec<Strategy> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Resolve one request. Never fails.
    pub async fn resolve(&self, request: &TranslationRequest) -> TranslationResult {
        if request.text.is_empty() {
            debug!("Empty input, skipping all strategies");
            return TranslationResult::empty(request);
        }

        for strategy in &self.strategies {
            let kind = strategy.kind();
            log_strategy_attempt(kind, &request.target_language);

            match attempt(strategy.as_ref(), request).await {
                Ok(translated) if !translated.text.is_empty() => {
                    let result = TranslationResult::from_translated(request, kind, translated);
                    log_resolution(&request.text, &result);
                    return result;
                }
                Ok(_) => log_strategy_failure(kind, &FailureReason::EmptyTranslation),
                Err(reason) => log_strategy_failure(kind, &reason),
            }
        }

        // Every configured strategy failed; the generator cannot
        let result = TranslationResult::from_translated(
            request,
            Strategy::Generated,
            self.generator.produce(request),
        );
        log_resolution(&request.text, &result);
        result
    }

    /// Convenience wrapper building the request
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslationResult {
        self.resolve(&TranslationRequest::new(text, source_language, target_language))
            .await
    }
}

/// Run one strategy under its own timeout
async fn attempt(
    strategy: &dyn TranslationStrategy,
    request: &TranslationRequest,
) -> StrategyOutcome {
    match strategy.timeout() {
        Some(limit) => tokio::time::timeout(limit, strategy.translate(request))
            .await
            .unwrap_or(Err(FailureReason::Timeout)),
        None => strategy.translate(request).await,
    }
}

/// Assembles a resolver's strategy list in call order
#[derive(Default)]
pub struct TranslationResolverBuilder {
    strategies: Vec<Arc<dyn TranslationStrategy>>,
}

impl TranslationResolverBuilder {
    pub fn strategy(mut self, strategy: Arc<dyn TranslationStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn remote(self, client: Arc<GroqClient>) -> Self {
        self.strategy(Arc::new(RemoteStrategy::new(client)))
    }

    /// Adds the proxy strategy when one is given
    pub fn proxy(self, proxy: Option<ProxyStrategy>) -> Self {
        match proxy {
            Some(proxy) => self.strategy(Arc::new(proxy)),
            None => self,
        }
    }

    pub fn dictionary(self, dictionary: Arc<PhraseDictionary>) -> Self {
        self.strategy(Arc::new(DictionaryStrategy::new(dictionary)))
    }

    pub fn generator(self) -> Self {
        self.strategy(Arc::new(MockGenerator::new()))
    }

    pub fn build(self) -> TranslationResolver {
        TranslationResolver {
            strategies: self.strategies,
            generator: MockGenerator::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::models::Translated;

    struct Scripted {
        kind: Strategy,
        outcome: StrategyOutcome,
        calls: AtomicUsize,
        delay: Option<Duration>,
    }

    impl Scripted {
        fn new(kind: Strategy, outcome: StrategyOutcome) -> Arc<Self> {
            Arc::new(Self { kind, outcome, calls: AtomicUsize::new(0), delay: None })
        }

        fn slow(kind: Strategy, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                kind,
                outcome: Ok(Translated::full("late")),
                calls: AtomicUsize::new(0),
                delay: Some(delay),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslationStrategy for Scripted {
        fn kind(&self) -> Strategy {
            self.kind
        }

        async fn translate(&self, _request: &TranslationRequest) -> StrategyOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcome.clone()
        }

        fn timeout(&self) -> Option<Duration> {
            self.delay.map(|_| Duration::from_millis(20))
        }
    }

    fn offline() -> TranslationResolver {
        TranslationResolver::offline(Arc::new(PhraseDictionary::builtin()))
    }

    #[tokio::test]
    async fn test_empty_input_runs_nothing() {
        let first = Scripted::new(Strategy::Remote, Ok(Translated::full("x")));
        let resolver = TranslationResolver::builder().strategy(first.clone()).build();

        let result = resolver.translate("", "en", "es").await;

        assert_eq!(result.translated_text, "");
        assert_eq!(result.strategy_used, Strategy::Generated);
        assert!(!result.degraded);
        assert_eq!(first.calls(), 0);
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let remote = Scripted::new(
            Strategy::Remote,
            Err(FailureReason::Network("refused".to_string())),
        );
        let proxy = Scripted::new(Strategy::Proxy, Ok(Translated::full("Hola")));
        let dictionary = Scripted::new(Strategy::Dictionary, Ok(Translated::full("unused")));
        let resolver = TranslationResolver::builder()
            .strategy(remote.clone())
            .strategy(proxy.clone())
            .strategy(dictionary.clone())
            .build();

        let result = resolver.translate("Hello", "auto", "es").await;

        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.strategy_used, Strategy::Proxy);
        assert_eq!(result.source_language_used, "auto");
        assert_eq!((remote.calls(), proxy.calls(), dictionary.calls()), (1, 1, 0));
    }

    #[tokio::test]
    async fn test_empty_success_counts_as_failure() {
        let remote = Scripted::new(Strategy::Remote, Ok(Translated::full("")));
        let resolver = TranslationResolver::builder().strategy(remote).generator().build();
        let result = resolver.translate("Hello", "en", "xx").await;
        assert_eq!(result.strategy_used, Strategy::Generated);
    }

    #[tokio::test]
    async fn test_timeout_moves_on() {
        let slow = Scripted::slow(Strategy::Remote, Duration::from_secs(5));
        let resolver = TranslationResolver::builder()
            .strategy(slow.clone())
            .dictionary(Arc::new(PhraseDictionary::builtin()))
            .build();

        let result = resolver.translate("Thank you", "en", "es").await;

        assert_eq!(slow.calls(), 1);
        assert_eq!(result.strategy_used, Strategy::Dictionary);
        assert_eq!(result.translated_text, "Gracias");
    }

    #[tokio::test]
    async fn test_all_failures_fall_back_to_generator() {
        let remote = Scripted::new(Strategy::Remote, Err(FailureReason::MissingCredential));
        let resolver = TranslationResolver::builder().strategy(remote).build();

        let result = resolver.translate("Hello", "en", "xx").await;

        assert_eq!(result.translated_text, "Helloa (xx)");
        assert_eq!(result.strategy_used, Strategy::Generated);
        assert!(result.degraded);
    }

    #[tokio::test]
    async fn test_offline_known_phrase() {
        let result = offline().translate("Thank you", "en", "es").await;
        assert_eq!(result.translated_text, "Gracias");
        assert_eq!(result.strategy_used, Strategy::Dictionary);
        assert!(!result.degraded);
    }

    #[tokio::test]
    async fn test_offline_unknown_language_is_generated() {
        let result = offline().translate("Hello", "en", "xx").await;
        assert_eq!(result.translated_text, "Helloa (xx)");
        assert_eq!(result.strategy_used, Strategy::Generated);
        assert!(result.degraded);
    }

    #[tokio::test]
    async fn test_with_leading_keeps_original_chain() {
        let backend = Scripted::new(Strategy::Proxy, Err(FailureReason::UpstreamFallback));
        let base = offline();
        let extended = base.with_leading(backend.clone());

        assert_eq!(
            extended.strategy_kinds(),
            vec![Strategy::Proxy, Strategy::Dictionary, Strategy::Generated]
        );
        assert_eq!(base.strategy_kinds(), vec![Strategy::Dictionary, Strategy::Generated]);

        let result = extended.translate("Thank you", "en", "es").await;
        assert_eq!(result.strategy_used, Strategy::Dictionary);
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_builder_order() {
        let client = Arc::new(GroqClient::new(&crate::config::GroqConfig::default()).unwrap());
        let resolver = TranslationResolver::builder()
            .remote(client)
            .proxy(None)
            .dictionary(Arc::new(PhraseDictionary::new()))
            .generator()
            .build();
        assert_eq!(
            resolver.strategy_kinds(),
            vec![Strategy::Remote, Strategy::Dictionary, Strategy::Generated]
        );
    }
}
