//! Run state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a run stands. Stages only move forward; `reset` returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    FeaturesComputed,
    ExposureComputed,
    ScoresComputed,
    AlertsGenerated,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FeaturesComputed => "features_computed",
            Self::ExposureComputed => "exposure_computed",
            Self::ScoresComputed => "scores_computed",
            Self::AlertsGenerated => "alerts_generated",
        }
    }

    /// The only state this one may advance to.
    pub fn successor(self) -> Option<RunState> {
        match self {
            Self::Idle => Some(Self::FeaturesComputed),
            Self::FeaturesComputed => Some(Self::ExposureComputed),
            Self::ExposureComputed => Some(Self::ScoresComputed),
            Self::ScoresComputed => Some(Self::AlertsGenerated),
            Self::AlertsGenerated => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.successor().is_none()
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
