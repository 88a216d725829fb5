//! Pipeline errors.

use super::error_code::{self, SentinelErrorCode};
use super::{AlertError, ConfigError, GraphError};

/// Errors that can occur during a scoring run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Alert error: {0}")]
    Alert(#[from] AlertError),

    #[error("invalid run transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("worker pool construction failed: {message}")]
    ThreadPool { message: String },
}

impl SentinelErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Alert(e) => e.error_code(),
            Self::InvalidTransition { .. } => error_code::INVALID_TRANSITION,
            Self::ThreadPool { .. } => error_code::THREAD_POOL_ERROR,
        }
    }
}
