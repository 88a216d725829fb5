//! Named, explainable components of a severity score.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SCORE_CLAMP_FACTOR;

/// Identifier of a score factor.
///
/// The six rule kinds are the closed rule set; `ScoreClamp` marks the
/// adjustment applied when the raw score falls outside the reported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    RapidFanOut,
    HighFanOut,
    HighFanIn,
    DirectExposure,
    IndirectExposure,
    PropagatedExposure,
    ScoreClamp,
}

impl FactorKind {
    /// Stable rule name used in config keys and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RapidFanOut => "rapid_fan_out",
            Self::HighFanOut => "high_fan_out",
            Self::HighFanIn => "high_fan_in",
            Self::DirectExposure => "direct_exposure",
            Self::IndirectExposure => "indirect_exposure",
            Self::PropagatedExposure => "propagated_exposure",
            Self::ScoreClamp => SCORE_CLAMP_FACTOR,
        }
    }

    pub fn is_rule(self) -> bool {
        !matches!(self, Self::ScoreClamp)
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, numeric, explainable component of a severity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub rule: FactorKind,
    pub contribution: f64,
    pub reason: String,
}

impl FactorContribution {
    pub fn new(rule: FactorKind, contribution: f64, reason: impl Into<String>) -> Self {
        Self {
            rule,
            contribution,
            reason: reason.into(),
        }
    }

    /// Canonical decomposition order: magnitude descending, then rule name.
    pub fn decomposition_order(a: &Self, b: &Self) -> Ordering {
        b.contribution
            .abs()
            .total_cmp(&a.contribution.abs())
            .then_with(|| a.rule.as_str().cmp(b.rule.as_str()))
    }
}
