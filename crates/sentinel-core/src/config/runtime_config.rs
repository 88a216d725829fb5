use serde::{Deserialize, Serialize};

/// Execution configuration for a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Dedicated worker thread count. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}
