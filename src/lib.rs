//! Voxify translation resolver
//!
//! Resolves translation requests through an ordered chain of strategies
//! (remote LLM, proxy server, phrase dictionary, deterministic generation)
//! and never fails to produce a result. Also provides the HTTP proxy server
//! the browser client talks to.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FailureReason, Result, VoxifyError};

// Re-export main components for easy access
pub use i18n::PhraseDictionary;
pub use models::{Strategy, TranslationRequest, TranslationResult};
pub use services::{ServiceFactory, TranslationResolver};
pub use state::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
