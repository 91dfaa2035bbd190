//! Translation through a Voxify proxy server's `/api/translate` route, or
//! through the secondary backend's `/translate-text` route

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use crate::config::{BackendConfig, ProxyConfig};
use crate::models::{
    Strategy, TranslateApiRequest, TranslateApiResponse, Translated, TranslationRequest,
};
use crate::utils::errors::{FailureReason, Result, StrategyOutcome, VoxifyError};
use crate::utils::helpers::clean_llm_output;
use super::strategy::TranslationStrategy;

#[derive(Debug, Clone)]
pub struct ProxyStrategy {
    client: Client,
    endpoint: String,
    timeout: Duration,
    ai_enhance: Option<bool>,
}

const PROXY_ROUTE: &str = "/api/translate";
const BACKEND_ROUTE: &str = "/translate-text";

impl ProxyStrategy {
    /// Build the strategy for the proxy at `base_url`
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        Self::with_route(base_url, PROXY_ROUTE, timeout_seconds)
    }

    /// Build the strategy for `route` under `base_url`
    pub fn with_route(base_url: &str, route: &str, timeout_seconds: u64) -> Result<Self> {
        url::Url::parse(base_url)?;
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), route);
        let timeout = Duration::from_secs(timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(VoxifyError::Http)?;

        Ok(Self {
            client,
            endpoint,
            timeout,
            ai_enhance: None,
        })
    }

    /// `None` when no proxy URL is configured
    pub fn from_config(config: &ProxyConfig) -> Result<Option<Self>> {
        config
            .url
            .as_deref()
            .map(|url| Self::new(url, config.timeout_seconds))
            .transpose()
    }

    /// The secondary backend, `None` when `backend.url` is unset
    pub fn backend(config: &BackendConfig) -> Result<Option<Self>> {
        config
            .url
            .as_deref()
            .map(|url| Self::with_route(url, BACKEND_ROUTE, config.timeout_seconds))
            .transpose()
    }

    /// Send `aiEnhance` with every request
    pub fn with_ai_enhance(mut self, enabled: bool) -> Self {
        self.ai_enhance = Some(enabled);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationStrategy for ProxyStrategy {
    fn kind(&self) -> Strategy {
        Strategy::Proxy
    }

    async fn translate(&self, request: &TranslationRequest) -> StrategyOutcome {
        let body = TranslateApiRequest {
            text: Some(request.text.clone()),
            source_language: Some(request.source_language.clone()),
            target_language: Some(request.target_language.clone()),
            ai_enhance: self.ai_enhance,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureReason::HttpStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let payload: TranslateApiResponse = serde_json::from_str(&text)
            .map_err(|e| FailureReason::MalformedResponse(e.to_string()))?;

        // The proxy answers 200 with its own fallback when its LLM call failed
        if payload.fallback || !payload.success {
            debug!(endpoint = %self.endpoint, "Proxy returned a fallback translation");
            return Err(FailureReason::UpstreamFallback);
        }

        let translation = payload
            .text()
            .map(clean_llm_output)
            .filter(|t| !t.is_empty())
            .ok_or(FailureReason::EmptyTranslation)?;

        Ok(Translated::full(translation))
    }

    fn timeout(&self) -> Option<Duration> {
        Some(self.timeout)
    }
}
