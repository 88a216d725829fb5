//! Propagated exposure records.

use serde::{Deserialize, Serialize};

use crate::types::collections::SmallVec4;
use crate::types::NodeId;

/// One (seed, hop, mass) triple that reached a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureContribution {
    pub seed: NodeId,
    pub hop: u32,
    pub mass: f64,
}

/// Accumulated propagated risk mass for a non-seed node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureRecord {
    pub node_id: NodeId,
    /// Sum of `contributions` in their stored order.
    pub total: f64,
    /// Sorted by (hop, seed).
    pub contributions: SmallVec4<ExposureContribution>,
}

impl ExposureRecord {
    /// An empty record: the node was not reached within the hop bound.
    pub fn unreached(node_id: NodeId) -> Self {
        Self {
            node_id,
            total: 0.0,
            contributions: SmallVec4::new(),
        }
    }

    /// Build a record, sorting contributions canonically and summing in that order.
    pub fn from_contributions(
        node_id: NodeId,
        mut contributions: SmallVec4<ExposureContribution>,
    ) -> Self {
        contributions.sort_by(|a, b| a.hop.cmp(&b.hop).then_with(|| a.seed.cmp(&b.seed)));
        let total = contributions.iter().fold(0.0, |acc, c| acc + c.mass);
        Self {
            node_id,
            total,
            contributions,
        }
    }

    pub fn is_exposed(&self) -> bool {
        self.total > 0.0
    }

    /// The single largest contribution. Ties go to the lower hop, then lower seed id.
    pub fn dominant(&self) -> Option<&ExposureContribution> {
        self.contributions.iter().max_by(|a, b| {
            a.mass
                .total_cmp(&b.mass)
                .then_with(|| b.hop.cmp(&a.hop))
                .then_with(|| b.seed.cmp(&a.seed))
        })
    }

    /// Number of distinct seeds that reached this node.
    pub fn seed_count(&self) -> usize {
        let mut seeds: Vec<&NodeId> = self.contributions.iter().map(|c| &c.seed).collect();
        seeds.sort();
        seeds.dedup();
        seeds.len()
    }

    /// Closest hop at which any seed reached this node.
    pub fn nearest_hop(&self) -> Option<u32> {
        self.contributions.iter().map(|c| c.hop).min()
    }
}
