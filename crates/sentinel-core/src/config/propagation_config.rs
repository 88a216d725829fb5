use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_PROPAGATION_HOPS;
use crate::errors::ConfigError;

/// How arrivals from several senders (and several hops) of one seed combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationPolicy {
    /// Every path contributes; per-hop arrivals are averaged over senders and
    /// summed across hops.
    #[default]
    Additive,
    /// Only the strongest single path from each seed counts.
    MaxPath,
}

impl AccumulationPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::MaxPath => "max_path",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "additive" => Some(Self::Additive),
            "max_path" => Some(Self::MaxPath),
            _ => None,
        }
    }
}

impl fmt::Display for AccumulationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded risk propagation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Maximum hop distance from a seed. Must be >= 1.
    pub max_hops: u32,
    /// Mass injected by each seed at hop 0. Must be > 0.
    pub seed_injection_mass: f64,
    /// Per-relay decay factor in (0, 1).
    pub decay_factor: f64,
    /// Follow outgoing edges only (fund flow) instead of both directions.
    pub directional: bool,
    pub accumulation: AccumulationPolicy,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            max_hops: defaults::DEFAULT_MAX_HOPS,
            seed_injection_mass: defaults::DEFAULT_SEED_INJECTION_MASS,
            decay_factor: defaults::DEFAULT_DECAY_FACTOR,
            directional: defaults::DEFAULT_DIRECTIONAL,
            accumulation: AccumulationPolicy::default(),
        }
    }
}

impl PropagationConfig {
    /// Check the `[propagation]` section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hops < 1 || self.max_hops > MAX_PROPAGATION_HOPS {
            return Err(ConfigError::invalid(
                "propagation.max_hops",
                format!("must be between 1 and {MAX_PROPAGATION_HOPS}, got {}", self.max_hops),
            ));
        }
        if !self.seed_injection_mass.is_finite() || self.seed_injection_mass <= 0.0 {
            return Err(ConfigError::invalid(
                "propagation.seed_injection_mass",
                format!("must be finite and > 0, got {}", self.seed_injection_mass),
            ));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(ConfigError::invalid(
                "propagation.decay_factor",
                format!("must be in (0, 1), got {}", self.decay_factor),
            ));
        }
        Ok(())
    }
}
