//! Error handling for LinguaRelay
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for LinguaRelay application
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Translation provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

/// Translation provider specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider timeout")]
    Timeout,

    #[error("Provider service unavailable")]
    ServiceUnavailable,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no result")]
    NoResult,

    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    #[error("Provider configuration error: {0}")]
    Config(String),
}

/// Result type alias for LinguaRelay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Result type alias for translation provider operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_connect() {
            ProviderError::ServiceUnavailable
        } else if e.is_decode() {
            ProviderError::InvalidResponse(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }
}

impl RelayError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            RelayError::Database(_) => false,
            RelayError::Migration(_) => false,
            RelayError::Telegram(_) => true,
            RelayError::Provider(e) => e.is_transient(),
            RelayError::Config(_) => false,
            RelayError::PermissionDenied(_) => false,
            RelayError::PreconditionFailed(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RelayError::Database(_) => ErrorSeverity::Critical,
            RelayError::Migration(_) => ErrorSeverity::Critical,
            RelayError::Config(_) => ErrorSeverity::Critical,
            RelayError::Provider(_) => ErrorSeverity::Warning,
            RelayError::PermissionDenied(_) => ErrorSeverity::Warning,
            RelayError::PreconditionFailed(_) => ErrorSeverity::Info,
            RelayError::Telegram(_) => ErrorSeverity::Error,
        }
    }
}

impl ProviderError {
    /// Errors that may succeed on a later message; the engine never retries them
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProviderError::Timeout | ProviderError::ServiceUnavailable | ProviderError::RequestFailed(_)
        )
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
