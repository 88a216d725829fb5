use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Minimum out-degree for the rapid fan-out flag (inclusive).
    pub fan_out_threshold: usize,
    /// Maximum in-degree for the rapid fan-out flag (inclusive).
    pub fan_in_threshold: usize,
    /// Minimum in-degree for the high fan-in (aggregation) rule (inclusive).
    pub high_fan_in_threshold: usize,
    /// Compute strict 2-hop neighbor exposure.
    pub compute_two_hop: bool,
    /// Maximum illicit neighbor ids listed per hop in alert evidence.
    pub evidence_neighbor_limit: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            fan_out_threshold: defaults::DEFAULT_FAN_OUT_THRESHOLD,
            fan_in_threshold: defaults::DEFAULT_FAN_IN_THRESHOLD,
            high_fan_in_threshold: defaults::DEFAULT_HIGH_FAN_IN_THRESHOLD,
            compute_two_hop: defaults::DEFAULT_COMPUTE_TWO_HOP,
            evidence_neighbor_limit: defaults::DEFAULT_EVIDENCE_NEIGHBOR_LIMIT,
        }
    }
}
