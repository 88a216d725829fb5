//! Alert generation errors.

use super::error_code::{self, SentinelErrorCode};

/// Errors raised by the Alert Generator. A failed generation returns no
/// partial alert list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlertError {
    #[error("cannot generate alerts for a graph with zero nodes")]
    EmptyGraph,

    #[error("no feature row for scored node {id}")]
    MissingFeatures { id: String },

    #[error("score {score} of node {id} is below every severity tier")]
    Untiered { id: String, score: f64 },
}

impl SentinelErrorCode for AlertError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGraph => error_code::EMPTY_GRAPH,
            Self::MissingFeatures { .. } => error_code::MISSING_FEATURES,
            Self::Untiered { .. } => error_code::UNTIERED_SCORE,
        }
    }
}
