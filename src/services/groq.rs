//! Groq chat completion client and the remote translation strategy
//!
//! The client turns every transport, status and decoding problem into a
//! [`FailureReason`] at the network boundary, so callers only ever match on
//! an [`LlmOutcome`].

use std::time::Duration;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::config::GroqConfig;
use crate::i18n::display_name;
use crate::models::{ChatMessage, Strategy, Translated, TranslationRequest};
use crate::utils::errors::{FailureReason, LlmOutcome, Result, StrategyOutcome, VoxifyError};
use crate::utils::helpers::clean_llm_output;
use super::strategy::TranslationStrategy;

pub const TRANSLATOR_SYSTEM_PROMPT: &str = concat!(
    "You are a professional multilingual translator for a travel and communication app. ",
    "Translate text precisely and naturally."
);

/// Sampling parameters for one completion
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl Sampling {
    pub fn from_config(config: &GroqConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the chat completions endpoint
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    sampling: Sampling,
    timeout: Duration,
}

impl GroqClient {
    /// Create a new GroqClient from configuration
    pub fn new(config: &GroqConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Voxify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(VoxifyError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            sampling: Sampling::from_config(config),
            timeout,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Configured sampling parameters
    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one chat completion and return the first choice's content
    pub async fn complete(&self, messages: &[ChatMessage], sampling: &Sampling) -> LlmOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(FailureReason::MissingCredential);
        };

        let body = ChatCompletionRequest {
            model: &sampling.model,
            messages,
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            top_p: sampling.top_p,
        };

        debug!(
            model = %sampling.model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body = %error_text, "Chat completion rejected");
            return Err(FailureReason::HttpStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| FailureReason::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| FailureReason::MalformedResponse("no choices in completion".to_string()))
    }

    /// Completion for a bare prompt using the configured sampling
    pub async fn generate(&self, prompt: &str) -> LlmOutcome {
        self.complete(&[ChatMessage::user(prompt)], &self.sampling).await
    }
}

/// User prompt for translating `text`
pub fn translation_prompt(request: &TranslationRequest) -> String {
    let target = display_name(&request.target_language);
    if request.is_auto_source() {
        format!("Translate the following text to {}:\n\n\"{}\"", target, request.text)
    } else {
        format!(
            "Translate the following {} text to {}:\n\n\"{}\"",
            display_name(&request.source_language),
            target,
            request.text
        )
    }
}

/// Direct LLM translation
#[derive(Debug, Clone)]
pub struct RemoteStrategy {
    client: Arc<GroqClient>,
}

impl RemoteStrategy {
    pub fn new(client: Arc<GroqClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationStrategy for RemoteStrategy {
    fn kind(&self) -> Strategy {
        Strategy::Remote
    }

    async fn translate(&self, request: &TranslationRequest) -> StrategyOutcome {
        let messages = [
            ChatMessage::system(TRANSLATOR_SYSTEM_PROMPT),
            ChatMessage::user(translation_prompt(request)),
        ];

        let raw = self.client.complete(&messages, self.client.sampling()).await?;
        let cleaned = clean_llm_output(&raw);
        if cleaned.is_empty() {
            return Err(FailureReason::EmptyTranslation);
        }
        Ok(Translated::full(cleaned))
    }

    fn timeout(&self) -> Option<Duration> {
        Some(self.client.timeout())
    }
}
