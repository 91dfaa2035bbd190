//! Mock Groq API and proxy servers for testing
//!
//! Uses wiremock to stand in for the chat completions endpoint, a remote
//! Voxify proxy's `/api/translate` route and the secondary backend's
//! `/translate-text` route.

use std::time::Duration;
use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
pub const TEST_API_KEY: &str = "gsk_test_key";
pub const BACKEND_PATH: &str = "/translate-text";

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn status(status: u16) -> Self {
        Self { status, ..Self::default() }
    }

    pub fn delayed(delay_ms: u64) -> Self {
        Self { delay_ms: Some(delay_ms), ..Self::default() }
    }

    pub fn body(body: Value) -> Self {
        Self { custom_response: Some(body), ..Self::default() }
    }

    fn template(&self, default_body: Value) -> ResponseTemplate {
        let body = self.custom_response.clone().unwrap_or(default_body);
        let mut template = ResponseTemplate::new(self.status).set_body_json(body);
        if let Some(delay) = self.delay_ms {
            template = template.set_delay(Duration::from_millis(delay));
        }
        template
    }
}

/// Completion body with `content` as the first choice
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama3-8b-8192",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Mock Groq chat completions server
pub struct GroqMockServer {
    pub server: MockServer,
}

impl GroqMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Full completions URL to put in settings
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.uri(), COMPLETIONS_PATH)
    }

    /// Answer every authenticated completion with `content`
    pub async fn mock_completion(&self, content: &str, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .respond_with(config.template(completion_body(content)))
            .mount(&self.server)
            .await;
    }

    /// Answer every completion with an error status
    pub async fn mock_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(MockResponseConfig::status(status).template(json!({
                "error": { "message": "upstream failure", "type": "server_error" }
            })))
            .mount(&self.server)
            .await;
    }

    /// Requests the server has seen so far
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}

/// Mock of a remote Voxify proxy
pub struct ProxyMockServer {
    pub server: MockServer,
}

impl ProxyMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Successful translation
    pub async fn mock_translation(&self, translation: &str) {
        self.mock_translate(MockResponseConfig::body(json!({
            "translation": translation,
            "translated": translation,
            "sourceLanguage": "auto",
            "targetLanguage": "es",
            "success": true
        })))
        .await;
    }

    /// Proxy whose own LLM call failed
    pub async fn mock_fallback(&self, text: &str) {
        self.mock_translate(MockResponseConfig::body(json!({
            "translation": format!("[FALLBACK] {}", text),
            "translated": format!("[FALLBACK] {}", text),
            "success": true,
            "fallback": true
        })))
        .await;
    }

    pub async fn mock_translate(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(config.template(json!({ "success": true })))
            .mount(&self.server)
            .await;
    }

    /// Secondary backend answering every request with `translated`
    pub async fn mock_backend_translation(&self, translated: &str) {
        self.mock_backend(MockResponseConfig::body(json!({
            "success": true,
            "translated": translated,
            "sourceLanguage": "auto",
            "targetLanguage": "es",
            "aiEnhanced": true
        })))
        .await;
    }

    pub async fn mock_backend(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(BACKEND_PATH))
            .respond_with(config.template(json!({ "success": true })))
            .mount(&self.server)
            .await;
    }

    /// Bodies posted to the secondary backend so far
    pub async fn backend_requests(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == BACKEND_PATH)
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
