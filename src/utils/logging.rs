//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Voxify resolver and proxy server.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::{Strategy, TranslationResult};
use crate::utils::errors::{FailureReason, Result, VoxifyError};
use crate::utils::helpers::truncate_text;

/// Initialize logging based on configuration.
///
/// The returned guard must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "voxify.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| VoxifyError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the start of a strategy attempt
pub fn log_strategy_attempt(strategy: Strategy, target_language: &str) {
    debug!(
        strategy = %strategy,
        target_language = target_language,
        "Attempting translation strategy"
    );
}

/// Log a strategy failure; the resolver moves on afterwards
pub fn log_strategy_failure(strategy: Strategy, reason: &FailureReason) {
    if reason.is_network() || matches!(reason, FailureReason::MissingCredential) {
        warn!(
            strategy = %strategy,
            reason = %reason,
            "Translation strategy failed, falling through"
        );
    } else {
        debug!(
            strategy = %strategy,
            reason = %reason,
            "Translation strategy produced nothing, falling through"
        );
    }
}

/// Log the final resolution of a request
pub fn log_resolution(text: &str, result: &TranslationResult) {
    info!(
        text = %truncate_text(text, 50),
        source_language = %result.source_language_used,
        target_language = %result.target_language,
        strategy = %result.strategy_used,
        degraded = result.degraded,
        "Translation resolved"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log performance metrics
pub fn log_performance_metric(metric_name: &str, value: f64, unit: &str) {
    debug!(
        metric = metric_name,
        value = value,
        unit = unit,
        "Performance metric recorded"
    );
}
