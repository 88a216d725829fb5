//! AlertGenerator: threshold, tier, order.

use std::cmp::Ordering;

use sentinel_core::config::AlertConfig;
use sentinel_core::{Alert, AlertError, ConfigError};
use sentinel_features::{FeatureTable, NodeFeatures};
use sentinel_graph::TransactionGraph;
use sentinel_propagation::ExposureMap;
use sentinel_scoring::{ScoreBreakdown, ScoreTable};

use crate::{evidence, typology};

#[derive(Debug, Clone, Default)]
pub struct AlertGenerator {
    config: AlertConfig,
}

impl AlertGenerator {
    /// Fails with `InvalidConfiguration` when the tiers cannot rank every
    /// alert or `min_tier` names no configured tier.
    pub fn new(config: AlertConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// One alert per node whose score reaches the threshold (and, when
    /// `min_tier` is set, whose tier ranks at least that high). Ordered by
    /// score descending, ties by node id ascending.
    ///
    /// Fails on a graph with zero nodes, on a scored node with no feature
    /// row, and on a qualifying score that no tier covers.
    pub fn generate(
        &self,
        graph: &TransactionGraph,
        features: &FeatureTable,
        exposure: &ExposureMap,
        scores: &ScoreTable,
    ) -> Result<Vec<Alert>, AlertError> {
        if graph.is_empty() {
            return Err(AlertError::EmptyGraph);
        }

        let tiers = self.config.tier_table();
        let min_rank = self
            .config
            .min_tier
            .as_deref()
            .and_then(|name| tiers.rank_of(name));

        let mut alerts: Vec<Alert> = Vec::new();
        for row in scores {
            if row.score < self.config.severity_threshold {
                continue;
            }
            let tier = tiers.assign(row.score).ok_or_else(|| AlertError::Untiered {
                id: row.node_id.to_string(),
                score: row.score,
            })?;
            if let Some(min_rank) = min_rank {
                if tiers.rank_of(&tier.name).map_or(true, |r| r < min_rank) {
                    continue;
                }
            }
            let node_features =
                features
                    .get(&row.node_id)
                    .ok_or_else(|| AlertError::MissingFeatures {
                        id: row.node_id.to_string(),
                    })?;
            alerts.push(self.alert(row, &tier.name, node_features, exposure));
        }

        alerts.sort_by(alert_order);

        tracing::debug!(
            alerts = alerts.len(),
            threshold = self.config.severity_threshold,
            min_tier = self.config.min_tier.as_deref().unwrap_or("-"),
            "alerts generated"
        );
        Ok(alerts)
    }

    fn alert(
        &self,
        row: &ScoreBreakdown,
        tier: &str,
        features: &NodeFeatures,
        exposure: &ExposureMap,
    ) -> Alert {
        Alert {
            node_id: row.node_id.clone(),
            score: row.score,
            raw_score: row.raw_score,
            tier: tier.to_string(),
            factors: row.factors.clone(),
            clamp: row.clamp.clone(),
            typologies: typology::classify(features),
            evidence: evidence::build(features, exposure.get(&row.node_id)),
        }
    }
}

/// Canonical alert order: score descending, then node id ascending.
pub fn alert_order(a: &Alert, b: &Alert) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.node_id.cmp(&b.node_id))
}
