//! ScoringEngine: evaluates the rule set for every node in parallel.

use std::time::Instant;

use rayon::prelude::*;
use sentinel_core::config::ScoringConfig;
use sentinel_core::ConfigError;
use sentinel_features::{FeatureTable, NodeFeatures};
use sentinel_propagation::ExposureMap;

use crate::breakdown::{ScoreBreakdown, ScoreTable};
use crate::rules::{Rule, RuleInput};

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Fails with `InvalidConfiguration` on a negative or non-finite weight
    /// or an empty score range.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single node.
    pub fn score_node(&self, features: &NodeFeatures, exposure: &ExposureMap) -> ScoreBreakdown {
        let input = RuleInput {
            features,
            exposure: exposure.get(&features.node_id),
        };
        let factors = Rule::ALL
            .iter()
            .filter_map(|rule| rule.evaluate(input, &self.config.rule_weights))
            .collect();
        ScoreBreakdown::compute(
            features.node_id.clone(),
            factors,
            self.config.score_floor,
            self.config.score_ceiling,
        )
    }

    /// Score every node in the feature table. Output keeps ascending id order.
    pub fn score(&self, features: &FeatureTable, exposure: &ExposureMap) -> ScoreTable {
        let start = Instant::now();
        let rows: Vec<ScoreBreakdown> = features
            .as_slice()
            .par_iter()
            .map(|f| self.score_node(f, exposure))
            .collect();
        let table = ScoreTable::from_sorted(rows);

        tracing::debug!(
            nodes = table.len(),
            scored = table.scored_count(),
            clamped = table.clamped_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "scores computed"
        );
        table
    }
}
