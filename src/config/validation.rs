//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{VoxifyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_groq_config(&settings.groq)?;
    validate_proxy_config(&settings.proxy)?;
    validate_backend_config(&settings.backend)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(VoxifyError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(VoxifyError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate Groq configuration.
///
/// A missing API key is not an error: the remote strategy fails fast and
/// translations degrade to local strategies.
fn validate_groq_config(config: &super::GroqConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(VoxifyError::Config(
            "Groq API URL is required".to_string()
        ));
    }

    url::Url::parse(&config.api_url)?;

    if config.model.is_empty() {
        return Err(VoxifyError::Config(
            "Groq model is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(VoxifyError::Config(
            "Groq timeout must be greater than 0".to_string()
        ));
    }

    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(VoxifyError::Config(
            format!("Temperature must be between 0 and 2, got {}", config.temperature)
        ));
    }

    if !(0.0..=1.0).contains(&config.top_p) || config.top_p == 0.0 {
        return Err(VoxifyError::Config(
            format!("top_p must be in (0, 1], got {}", config.top_p)
        ));
    }

    if config.max_tokens == 0 {
        return Err(VoxifyError::Config(
            "Max tokens must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate proxy configuration
fn validate_proxy_config(config: &super::ProxyConfig) -> Result<()> {
    if let Some(ref proxy_url) = config.url {
        url::Url::parse(proxy_url)?;
    }

    if config.timeout_seconds == 0 {
        return Err(VoxifyError::Config(
            "Proxy timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate secondary backend configuration
fn validate_backend_config(config: &super::BackendConfig) -> Result<()> {
    if let Some(ref backend_url) = config.url {
        url::Url::parse(backend_url)?;
    }

    if config.timeout_seconds == 0 {
        return Err(VoxifyError::Config(
            "Backend timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(VoxifyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(VoxifyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_api_url() {
        let mut settings = Settings::default();
        settings.groq.api_url = "not a url".to_string();
        assert!(matches!(validate_settings(&settings), Err(VoxifyError::UrlParse(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.groq.timeout_seconds = 0;
        assert!(matches!(validate_settings(&settings), Err(VoxifyError::Config(_))));
    }

    #[test]
    fn test_rejects_sampling_out_of_range() {
        let mut settings = Settings::default();
        settings.groq.top_p = 1.5;
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.groq.temperature = -0.1;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_bad_backend_url() {
        let mut settings = Settings::default();
        settings.backend.url = Some("not a url".to_string());
        assert!(validate_settings(&settings).is_err());

        settings.backend.url = Some("http://localhost:8004".to_string());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_missing_api_key_is_allowed() {
        let mut settings = Settings::default();
        settings.groq.api_key = None;
        assert!(validate_settings(&settings).is_ok());
    }
}
