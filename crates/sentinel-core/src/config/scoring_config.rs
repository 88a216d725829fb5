use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::FactorKind;

use super::defaults;

/// One named coefficient per rule. When the `[scoring.rule_weights]` table is
/// present it must list every rule; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleWeights {
    pub rapid_fan_out: f64,
    pub high_fan_out: f64,
    pub high_fan_in: f64,
    pub direct_exposure: f64,
    pub indirect_exposure: f64,
    pub propagated_exposure: f64,
}

impl RuleWeights {
    /// All (rule name, weight) pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            (FactorKind::RapidFanOut.as_str(), self.rapid_fan_out),
            (FactorKind::HighFanOut.as_str(), self.high_fan_out),
            (FactorKind::HighFanIn.as_str(), self.high_fan_in),
            (FactorKind::DirectExposure.as_str(), self.direct_exposure),
            (FactorKind::IndirectExposure.as_str(), self.indirect_exposure),
            (FactorKind::PropagatedExposure.as_str(), self.propagated_exposure),
        ]
    }
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            rapid_fan_out: defaults::DEFAULT_WEIGHT_RAPID_FAN_OUT,
            high_fan_out: defaults::DEFAULT_WEIGHT_HIGH_FAN_OUT,
            high_fan_in: defaults::DEFAULT_WEIGHT_HIGH_FAN_IN,
            direct_exposure: defaults::DEFAULT_WEIGHT_DIRECT_EXPOSURE,
            indirect_exposure: defaults::DEFAULT_WEIGHT_INDIRECT_EXPOSURE,
            propagated_exposure: defaults::DEFAULT_WEIGHT_PROPAGATED_EXPOSURE,
        }
    }
}

/// Rule combination configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Lowest reportable severity.
    pub score_floor: f64,
    /// Highest reportable severity.
    pub score_ceiling: f64,
    pub rule_weights: RuleWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_floor: defaults::DEFAULT_SCORE_FLOOR,
            score_ceiling: defaults::DEFAULT_SCORE_CEILING,
            rule_weights: RuleWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Check the `[scoring]` section: non-negative finite weights and a
    /// finite, non-empty score range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, weight) in self.rule_weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::invalid(
                    &format!("scoring.rule_weights.{name}"),
                    format!("must be finite and >= 0, got {weight}"),
                ));
            }
        }
        let (floor, ceiling) = (self.score_floor, self.score_ceiling);
        if !floor.is_finite() || !ceiling.is_finite() || floor >= ceiling {
            return Err(ConfigError::invalid(
                "scoring.score_floor",
                format!("must be finite and below score_ceiling ({floor} >= {ceiling})"),
            ));
        }
        Ok(())
    }
}
