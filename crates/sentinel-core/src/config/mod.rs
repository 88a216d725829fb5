//! Configuration system for Sentinel.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod alert_config;
pub mod defaults;
pub mod feature_config;
pub mod propagation_config;
pub mod runtime_config;
pub mod scoring_config;
pub mod sentinel_config;

pub use alert_config::AlertConfig;
pub use feature_config::FeatureConfig;
pub use propagation_config::{AccumulationPolicy, PropagationConfig};
pub use runtime_config::RuntimeConfig;
pub use scoring_config::{RuleWeights, ScoringConfig};
pub use sentinel_config::{CliOverrides, SentinelConfig};
