//! Graph store errors.

use super::error_code::{self, SentinelErrorCode};

/// Structural integrity violations raised while building the graph.
/// All of them are fatal: graph construction aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node: {id}")]
    DuplicateNode { id: String },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("self-loop rejected on node {id}")]
    SelfLoop { id: String },
}

impl SentinelErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateNode { .. } => error_code::DUPLICATE_NODE,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
        }
    }
}
