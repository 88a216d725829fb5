//! # sentinel-core
//!
//! Foundation crate for the AML Sentinel risk engine.
//! Defines identifiers, shared models, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SentinelConfig;
pub use errors::{AlertError, ConfigError, GraphError, PipelineError, SentinelErrorCode};
pub use models::{
    Alert, AlertEvidence, ExposureContribution, ExposureRecord, FactorContribution, FactorKind,
    SeverityTier, TierTable, Typology,
};
pub use types::{Direction, NodeId, NodeLabel};
