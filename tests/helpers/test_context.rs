//! Test context for unified test setup
//!
//! Builds settings pointed at the mock servers and wires services and the
//! router from them, the same way `main` does.

use std::sync::Arc;
use axum::Router;
use voxify::{
    config::Settings,
    handlers::create_router,
    i18n::PhraseDictionary,
    services::{ServiceFactory, TranslationResolver},
    state::AppState,
};

use super::{
    groq_mock::{GroqMockServer, ProxyMockServer, TEST_API_KEY},
    simple_test::init_test_env,
};

/// Test configuration options
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub with_api_key: bool,
    pub with_proxy: bool,
    pub with_backend: bool,
    pub timeout_seconds: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            with_api_key: true,
            with_proxy: false,
            with_backend: false,
            timeout_seconds: 2,
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub groq: GroqMockServer,
    pub proxy: ProxyMockServer,
    pub settings: Settings,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Settings carry no Groq API key
    pub async fn without_api_key() -> Self {
        Self::new_with_config(TestConfig { with_api_key: false, ..TestConfig::default() }).await
    }

    /// Client-side chain with the proxy mock configured
    pub async fn with_proxy() -> Self {
        Self::new_with_config(TestConfig { with_proxy: true, ..TestConfig::default() }).await
    }

    /// Server with the secondary backend mock configured
    pub async fn with_backend() -> Self {
        Self::new_with_config(TestConfig { with_backend: true, ..TestConfig::default() }).await
    }

    pub async fn new_with_config(config: TestConfig) -> Self {
        init_test_env();

        let groq = GroqMockServer::new().await;
        let proxy = ProxyMockServer::new().await;

        let mut settings = Settings::default();
        settings.groq.api_url = groq.api_url();
        settings.groq.api_key = config.with_api_key.then(|| TEST_API_KEY.to_string());
        settings.groq.timeout_seconds = config.timeout_seconds;
        settings.proxy.url = config.with_proxy.then(|| proxy.base_url());
        settings.proxy.timeout_seconds = config.timeout_seconds;
        // The proxy mock also serves the secondary backend route
        settings.backend.url = config.with_backend.then(|| proxy.base_url());
        settings.backend.timeout_seconds = config.timeout_seconds;

        Self { groq, proxy, settings }
    }

    /// Client-side services, including the proxy when configured
    pub fn services(&self) -> ServiceFactory {
        ServiceFactory::new(&self.settings, PhraseDictionary::builtin())
            .expect("Failed to build services")
    }

    pub fn resolver(&self) -> TranslationResolver {
        self.services().resolver
    }

    /// Router as the server builds it
    pub fn router(&self) -> Router {
        let services = ServiceFactory::for_server(&self.settings, PhraseDictionary::builtin())
            .expect("Failed to build server services");
        create_router(Arc::new(AppState::new(self.settings.clone(), services)))
    }
}
