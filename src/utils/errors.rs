//! Error handling for Voxify
//!
//! This module defines the error types used by the server and service setup,
//! plus the failure taxonomy that translation strategies report to the
//! resolver. Strategy failures never reach callers of the resolver.

use thiserror::Error;

/// Main error type for Voxify application
#[derive(Error, Debug)]
pub enum VoxifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM API error: {0}")]
    Llm(#[from] LlmError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Groq completion API specific errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("LLM request timed out")]
    Timeout,

    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("LLM service unavailable")]
    ServiceUnavailable,
}

/// Why a single translation strategy did not produce a translation.
///
/// The resolver logs these and moves on to the next strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("credentials are not configured")]
    MissingCredential,

    #[error("upstream returned HTTP {0}")]
    HttpStatus(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("translation came back empty")]
    EmptyTranslation,

    #[error("upstream answered with a fallback translation")]
    UpstreamFallback,

    #[error("no dictionary entry matched")]
    NoMatch,

    #[error("no data for target language {0}")]
    Unsupported(String),
}

/// Result type alias for Voxify operations
pub type Result<T> = std::result::Result<T, VoxifyError>;

/// Tagged outcome of one LLM call, decoded at the network boundary
pub type LlmOutcome = std::result::Result<String, FailureReason>;

/// Outcome of one strategy attempt
pub type StrategyOutcome = std::result::Result<crate::models::Translated, FailureReason>;

impl VoxifyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            VoxifyError::Config(_) => false,
            VoxifyError::Llm(LlmError::MissingApiKey) => false,
            VoxifyError::Llm(_) => true,
            VoxifyError::Http(_) => true,
            VoxifyError::Serialization(_) => false,
            VoxifyError::Io(_) => true,
            VoxifyError::UrlParse(_) => false,
            VoxifyError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VoxifyError::Config(_) => ErrorSeverity::Critical,
            VoxifyError::Llm(LlmError::MissingApiKey) => ErrorSeverity::Warning,
            VoxifyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

impl FailureReason {
    /// Whether the failure came from talking to a remote service
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FailureReason::Timeout
                | FailureReason::Network(_)
                | FailureReason::HttpStatus(_)
                | FailureReason::MalformedResponse(_)
        )
    }
}

impl From<reqwest::Error> for FailureReason {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FailureReason::Timeout
        } else if e.is_decode() {
            FailureReason::MalformedResponse(e.to_string())
        } else if let Some(status) = e.status() {
            FailureReason::HttpStatus(status.as_u16())
        } else {
            FailureReason::Network(e.to_string())
        }
    }
}

impl From<FailureReason> for LlmError {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::Timeout => LlmError::Timeout,
            FailureReason::MissingCredential => LlmError::MissingApiKey,
            FailureReason::Network(_) => LlmError::ServiceUnavailable,
            FailureReason::MalformedResponse(msg) => LlmError::InvalidResponse(msg),
            FailureReason::EmptyTranslation => {
                LlmError::InvalidResponse("empty content".to_string())
            }
            other => LlmError::RequestFailed(other.to_string()),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_critical() {
        let err = VoxifyError::Config("missing port".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }

    #[test]
    fn test_missing_key_is_a_warning() {
        let err = VoxifyError::from(LlmError::MissingApiKey);
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_failure_reason_classification() {
        assert!(FailureReason::Timeout.is_network());
        assert!(FailureReason::HttpStatus(502).is_network());
        assert!(!FailureReason::NoMatch.is_network());
        assert!(!FailureReason::MissingCredential.is_network());
    }

    #[test]
    fn test_failure_reason_into_llm_error() {
        assert!(matches!(LlmError::from(FailureReason::Timeout), LlmError::Timeout));
        assert!(matches!(
            LlmError::from(FailureReason::MissingCredential),
            LlmError::MissingApiKey
        ));
        assert!(matches!(
            LlmError::from(FailureReason::HttpStatus(500)),
            LlmError::RequestFailed(_)
        ));
    }
}
