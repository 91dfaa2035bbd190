//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{
    BackendConfig, DictionaryConfig, GroqConfig, LoggingConfig, ProxyConfig, ServerConfig, Settings,
};
