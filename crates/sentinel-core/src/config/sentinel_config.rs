//! Top-level Sentinel configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AlertConfig, FeatureConfig, PropagationConfig, RuntimeConfig, ScoringConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SENTINEL_*`)
/// 3. Project config (`sentinel.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SentinelConfig {
    pub features: FeatureConfig,
    pub propagation: PropagationConfig,
    pub scoring: ScoringConfig,
    pub alerts: AlertConfig,
    pub runtime: RuntimeConfig,
}

/// Programmatic overrides, typically parsed from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_hops: Option<u32>,
    pub decay_factor: Option<f64>,
    pub seed_injection_mass: Option<f64>,
    pub directional: Option<bool>,
    pub severity_threshold: Option<f64>,
    pub min_tier: Option<String>,
    pub threads: Option<usize>,
}

impl SentinelConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        // Project config over compiled defaults. Missing keys keep their defaults.
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_toml_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            path = %project_config_path.display(),
            max_hops = config.propagation.max_hops,
            accumulation = %config.propagation.accumulation,
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the effective configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `SENTINEL_*` environment variables.
    ///
    /// A variable that is set but does not parse is an error rather than
    /// being ignored.
    pub fn apply_env_overrides(config: &mut SentinelConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<u32>("SENTINEL_MAX_HOPS", "propagation.max_hops")? {
            config.propagation.max_hops = v;
        }
        if let Some(v) = env_value::<f64>("SENTINEL_DECAY_FACTOR", "propagation.decay_factor")? {
            config.propagation.decay_factor = v;
        }
        if let Some(v) = env_value::<f64>(
            "SENTINEL_SEED_INJECTION_MASS",
            "propagation.seed_injection_mass",
        )? {
            config.propagation.seed_injection_mass = v;
        }
        if let Some(v) = env_value::<bool>("SENTINEL_DIRECTIONAL", "propagation.directional")? {
            config.propagation.directional = v;
        }
        if let Some(v) = env_value::<f64>(
            "SENTINEL_SEVERITY_THRESHOLD",
            "alerts.severity_threshold",
        )? {
            config.alerts.severity_threshold = v;
        }
        if let Some(v) = env_value::<usize>("SENTINEL_THREADS", "runtime.threads")? {
            config.runtime.threads = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut SentinelConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_hops {
            config.propagation.max_hops = v;
        }
        if let Some(v) = cli.decay_factor {
            config.propagation.decay_factor = v;
        }
        if let Some(v) = cli.seed_injection_mass {
            config.propagation.seed_injection_mass = v;
        }
        if let Some(v) = cli.directional {
            config.propagation.directional = v;
        }
        if let Some(v) = cli.severity_threshold {
            config.alerts.severity_threshold = v;
        }
        if let Some(ref v) = cli.min_tier {
            config.alerts.min_tier = Some(v.clone());
        }
        if let Some(v) = cli.threads {
            config.runtime.threads = Some(v);
        }
    }

    /// Validate the configuration values. Fails on the first offending parameter.
    pub fn validate(config: &SentinelConfig) -> Result<(), ConfigError> {
        config.propagation.validate()?;
        config.scoring.validate()?;
        config.alerts.validate()?;
        if config.runtime.threads == Some(0) {
            return Err(ConfigError::invalid("runtime.threads", "must be >= 1"));
        }
        Ok(())
    }
}

fn env_value<T: FromStr>(var: &str, parameter: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::invalid(parameter, format!("{var}='{raw}' could not be parsed"))
        }),
        Err(_) => Ok(None),
    }
}
