//! Per-run summary: stage durations and headline counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTiming {
    pub stage: String,
    pub duration_ms: u64,
}

/// Counts keyed by the standard field names in
/// `sentinel_core::tracing::metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub stages: Vec<StageTiming>,
    pub counts: BTreeMap<String, usize>,
}

impl RunSummary {
    pub(crate) fn record_stage(&mut self, stage: &str, duration_ms: u64) {
        self.stages.push(StageTiming {
            stage: stage.to_string(),
            duration_ms,
        });
    }

    pub(crate) fn record_count(&mut self, field: &str, value: usize) {
        self.counts.insert(field.to_string(), value);
    }

    pub fn count(&self, field: &str) -> Option<usize> {
        self.counts.get(field).copied()
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.stages.iter().map(|s| s.duration_ms).sum()
    }
}
