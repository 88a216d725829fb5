/// Sentinel engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound accepted for `propagation.max_hops`.
pub const MAX_PROPAGATION_HOPS: u32 = 16;

/// Project-level configuration file name, resolved relative to the run root.
pub const PROJECT_CONFIG_FILE: &str = "sentinel.toml";

/// Environment variable holding per-subsystem log filters.
pub const LOG_ENV_VAR: &str = "SENTINEL_LOG";

/// Rule identifier used for the clamp adjustment factor.
pub const SCORE_CLAMP_FACTOR: &str = "score_clamp";
