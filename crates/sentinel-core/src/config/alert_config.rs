use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::{SeverityTier, TierTable};

use super::defaults;

/// Alert generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Nodes with severity at or above this value become alerts.
    pub severity_threshold: f64,
    /// Optional tier name; alerts ranked below it are omitted.
    pub min_tier: Option<String>,
    /// Tiers ordered by strictly ascending lower bound.
    pub severity_tiers: Vec<SeverityTier>,
}

impl AlertConfig {
    pub fn tier_table(&self) -> TierTable<'_> {
        TierTable::new(&self.severity_tiers)
    }

    /// Check the `[alerts]` section. Tiers must be non-empty, uniquely and
    /// non-blank named, with finite, strictly ascending lower bounds, and the
    /// lowest bound must not exceed the threshold so every alert gets a tier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.severity_threshold.is_finite() {
            return Err(ConfigError::invalid(
                "alerts.severity_threshold",
                "must be finite",
            ));
        }
        let tiers = &self.severity_tiers;
        let Some(lowest) = tiers.first() else {
            return Err(ConfigError::invalid(
                "alerts.severity_tiers",
                "at least one tier is required",
            ));
        };
        for (i, tier) in tiers.iter().enumerate() {
            if tier.name.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "alerts.severity_tiers",
                    format!("tier {i} has an empty name"),
                ));
            }
            if !tier.lower_bound.is_finite() {
                return Err(ConfigError::invalid(
                    "alerts.severity_tiers",
                    format!("tier '{}' has a non-finite lower bound", tier.name),
                ));
            }
            if i > 0 && tier.lower_bound <= tiers[i - 1].lower_bound {
                return Err(ConfigError::invalid(
                    "alerts.severity_tiers",
                    format!(
                        "lower bounds must be strictly ascending ('{}' at {} follows {})",
                        tier.name,
                        tier.lower_bound,
                        tiers[i - 1].lower_bound
                    ),
                ));
            }
            if tiers[..i].iter().any(|t| t.name == tier.name) {
                return Err(ConfigError::invalid(
                    "alerts.severity_tiers",
                    format!("duplicate tier name '{}'", tier.name),
                ));
            }
        }
        if lowest.lower_bound > self.severity_threshold {
            return Err(ConfigError::invalid(
                "alerts.severity_threshold",
                format!(
                    "must be >= the lowest tier bound {}, got {}",
                    lowest.lower_bound, self.severity_threshold
                ),
            ));
        }
        if let Some(ref min_tier) = self.min_tier {
            if self.tier_table().rank_of(min_tier).is_none() {
                return Err(ConfigError::invalid(
                    "alerts.min_tier",
                    format!("'{min_tier}' is not a configured tier"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            severity_threshold: defaults::DEFAULT_SEVERITY_THRESHOLD,
            min_tier: None,
            severity_tiers: defaults::default_severity_tiers(),
        }
    }
}
