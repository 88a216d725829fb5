//! Standard stage names and field names shared by every Sentinel stage.
//!
//! Log events and the run summary use the same names so that structured
//! log queries and summaries line up across crates.

// Stage names.
pub const STAGE_FEATURES: &str = "features";
pub const STAGE_PROPAGATION: &str = "propagation";
pub const STAGE_SCORING: &str = "scoring";
pub const STAGE_ALERTS: &str = "alerts";

/// Stage wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Graph: node count.
pub const NODES: &str = "nodes";

/// Graph: edge count.
pub const EDGES: &str = "edges";

/// Propagation: number of seed (illicit) nodes.
pub const SEEDS: &str = "seeds";

/// Propagation: nodes with non-zero exposure.
pub const EXPOSED: &str = "exposed";

/// Features: nodes carrying the rapid fan-out flag.
pub const RAPID_FAN_OUT: &str = "rapid_fan_out";

/// Scoring: nodes with at least one fired rule.
pub const SCORED: &str = "scored";

/// Scoring: nodes whose score was clamped.
pub const CLAMPED: &str = "clamped";

/// Alerts: emitted alert count.
pub const ALERTS: &str = "alerts";
