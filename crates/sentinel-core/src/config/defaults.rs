//! Compiled defaults. Every tunable parameter has exactly one entry here.

use crate::models::SeverityTier;

// Features
pub const DEFAULT_FAN_OUT_THRESHOLD: usize = 10;
pub const DEFAULT_FAN_IN_THRESHOLD: usize = 2;
pub const DEFAULT_HIGH_FAN_IN_THRESHOLD: usize = 20;
pub const DEFAULT_COMPUTE_TWO_HOP: bool = true;
pub const DEFAULT_EVIDENCE_NEIGHBOR_LIMIT: usize = 5;

// Propagation
pub const DEFAULT_MAX_HOPS: u32 = 2;
pub const DEFAULT_SEED_INJECTION_MASS: f64 = 10.0;
pub const DEFAULT_DECAY_FACTOR: f64 = 0.5;
pub const DEFAULT_DIRECTIONAL: bool = false;

// Scoring
pub const DEFAULT_WEIGHT_RAPID_FAN_OUT: f64 = 30.0;
pub const DEFAULT_WEIGHT_HIGH_FAN_OUT: f64 = 20.0;
pub const DEFAULT_WEIGHT_HIGH_FAN_IN: f64 = 20.0;
pub const DEFAULT_WEIGHT_DIRECT_EXPOSURE: f64 = 40.0;
pub const DEFAULT_WEIGHT_INDIRECT_EXPOSURE: f64 = 10.0;
pub const DEFAULT_WEIGHT_PROPAGATED_EXPOSURE: f64 = 2.0;
pub const DEFAULT_SCORE_FLOOR: f64 = 0.0;
pub const DEFAULT_SCORE_CEILING: f64 = 100.0;

// Alerts
pub const DEFAULT_SEVERITY_THRESHOLD: f64 = 25.0;

/// Default tiers: low / medium / high / critical.
pub fn default_severity_tiers() -> Vec<SeverityTier> {
    vec![
        SeverityTier::new(0.0, "low"),
        SeverityTier::new(25.0, "medium"),
        SeverityTier::new(50.0, "high"),
        SeverityTier::new(75.0, "critical"),
    ]
}
