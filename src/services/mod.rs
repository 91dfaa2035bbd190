//! Services module
//!
//! Translation strategies, the resolver that chains them and the OCR
//! service built on top.

pub mod dictionary;
pub mod generator;
pub mod groq;
pub mod ocr;
pub mod proxy;
pub mod resolver;
pub mod strategy;

// Re-export commonly used services
pub use dictionary::DictionaryStrategy;
pub use generator::MockGenerator;
pub use groq::{GroqClient, RemoteStrategy, Sampling};
pub use ocr::{OcrService, ProcessedOcrText};
pub use proxy::ProxyStrategy;
pub use resolver::{TranslationResolver, TranslationResolverBuilder};
pub use strategy::TranslationStrategy;

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::i18n::PhraseDictionary;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub groq: Arc<GroqClient>,
    pub dictionary: Arc<PhraseDictionary>,
    pub resolver: TranslationResolver,
    pub ocr: OcrService,
    /// Secondary backend for `/api/translate-text`, when configured
    pub backend: Option<ProxyStrategy>,
}

impl ServiceFactory {
    /// Wire services from settings and an already loaded dictionary.
    ///
    /// The proxy strategy is added only when `proxy.url` is set.
    pub fn new(settings: &Settings, dictionary: PhraseDictionary) -> Result<Self> {
        let proxy = ProxyStrategy::from_config(&settings.proxy)?;
        Self::with_proxy(settings, dictionary, proxy)
    }

    /// Services for the proxy server itself, which must not call its own
    /// translate route
    pub fn for_server(settings: &Settings, dictionary: PhraseDictionary) -> Result<Self> {
        Self::with_proxy(settings, dictionary, None)
    }

    fn with_proxy(
        settings: &Settings,
        dictionary: PhraseDictionary,
        proxy: Option<ProxyStrategy>,
    ) -> Result<Self> {
        let groq = Arc::new(GroqClient::new(&settings.groq)?);
        let backend = ProxyStrategy::backend(&settings.backend)?;
        let dictionary = Arc::new(dictionary);

        let resolver = TranslationResolver::builder()
            .remote(groq.clone())
            .proxy(proxy)
            .dictionary(dictionary.clone())
            .generator()
            .build();

        let ocr = OcrService::new(resolver.clone(), Some(groq.clone()));

        Ok(Self {
            groq,
            dictionary,
            resolver,
            ocr,
            backend,
        })
    }

    /// Built-in dictionary plus the files under `dictionary.path`, if set
    pub async fn load_dictionary(settings: &Settings) -> Result<PhraseDictionary> {
        let mut dictionary = PhraseDictionary::builtin();
        if let Some(path) = settings.dictionary.path.as_deref() {
            dictionary.load_dir(std::path::Path::new(path)).await?;
        }
        Ok(dictionary)
    }

    /// Health summary for the status route
    pub fn health_check(&self) -> ServiceHealthStatus {
        ServiceHealthStatus {
            remote_configured: self.groq.has_api_key(),
            backend_configured: self.backend.is_some(),
            dictionary_languages: self.dictionary.languages().len(),
            strategies: self.resolver.strategy_kinds().len(),
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub remote_configured: bool,
    pub backend_configured: bool,
    pub dictionary_languages: usize,
    pub strategies: usize,
}

impl ServiceHealthStatus {
    /// Translation always works, so this only reflects the LLM
    pub fn is_fully_operational(&self) -> bool {
        self.remote_configured
    }

    /// Get list of degraded services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.remote_configured {
            issues.push(
                "GROQ_API_KEY is not configured, translations are offline only".to_string(),
            );
        }
        if self.dictionary_languages == 0 {
            issues.push("No phrase dictionaries loaded".to_string());
        }

        issues
    }
}
