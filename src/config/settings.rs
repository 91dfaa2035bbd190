//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Default Groq chat completions endpoint
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default completion model
pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub groq: GroqConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Groq completion API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroqConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

/// Backend proxy route configuration.
///
/// The proxy strategy only joins the chain when `url` is set; the server
/// never points at itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyConfig {
    pub url: Option<String>,
    pub timeout_seconds: u64,
}

/// Secondary translation backend behind `/api/translate-text`.
///
/// When `url` is unset the route answers from the server's own chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub timeout_seconds: u64,
}

/// Phrase dictionary data configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DictionaryConfig {
    /// Directory of `<lang>.json` files layered over the built-in tables
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("VOXIFY").separator("__"));

        // Conventional variable names used by the deployment
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            builder = builder.set_override("groq.api_key", key)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.normalize();
        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::VoxifyError> {
        super::validation::validate_settings(self)
    }

    /// Whether a Groq API key is available
    pub fn has_api_key(&self) -> bool {
        self.groq.api_key.is_some()
    }

    /// Blank strings coming from the environment mean "unset"
    fn normalize(&mut self) {
        self.groq.api_key = self.groq.api_key.take().filter(|k| !k.trim().is_empty());
        self.proxy.url = self.proxy.url.take().filter(|u| !u.trim().is_empty());
        self.backend.url = self.backend.url.take().filter(|u| !u.trim().is_empty());
        self.dictionary.path = self.dictionary.path.take().filter(|p| !p.trim().is_empty());
        self.logging.file_path = self.logging.file_path.take().filter(|p| !p.trim().is_empty());
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            groq: GroqConfig::default(),
            proxy: ProxyConfig::default(),
            backend: BackendConfig::default(),
            dictionary: DictionaryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GROQ_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_GROQ_MODEL.to_string(),
            timeout_seconds: 15,
            temperature: 0.3,
            max_tokens: 1000,
            top_p: 0.9,
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: 15,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}
