//! Configuration errors.

use super::error_code::{self, SentinelErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration for {parameter}: {message}")]
    InvalidConfiguration { parameter: String, message: String },
}

impl ConfigError {
    /// Shorthand for an `InvalidConfiguration` error.
    pub fn invalid(parameter: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}

impl SentinelErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => error_code::INVALID_CONFIGURATION,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
