//! Alert records: the sole output contract of the engine.
//!
//! Downstream reporting and narrative collaborators consume these records
//! without access to the graph, so every alert carries its full score
//! decomposition and the structural evidence behind it.

use serde::{Deserialize, Serialize};

use crate::types::{NodeId, NodeLabel};

use super::factor::FactorContribution;

/// Structural typology hint derived from fired features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Typology {
    /// Many senders converge on the node.
    Aggregation,
    /// The node pays out to many receivers.
    Distribution,
    /// Rapid fan-out with little inflow.
    Layering,
    Unknown,
}

impl Typology {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aggregation => "aggregation",
            Self::Distribution => "distribution",
            Self::Layering => "layering",
            Self::Unknown => "unknown",
        }
    }
}

/// Structural evidence attached to an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvidence {
    pub label: NodeLabel,
    pub fan_in: usize,
    pub fan_out: usize,
    pub neighbor_count: usize,
    pub illicit_neighbor_count: usize,
    pub illicit_neighbor_ratio: f64,
    pub two_hop_neighbor_count: usize,
    pub illicit_two_hop_count: usize,
    pub illicit_two_hop_ratio: f64,
    pub exposure_mass: f64,
    /// Illicit direct neighbors, ascending, truncated to the evidence limit.
    pub illicit_neighbors_1hop: Vec<NodeId>,
    /// Illicit strict 2-hop neighbors, ascending, truncated to the evidence limit.
    pub illicit_neighbors_2hop: Vec<NodeId>,
}

/// An analyst-ready alert for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub node_id: NodeId,
    /// Reported severity, clamped to the configured range.
    pub score: f64,
    /// Sum of `factors` before clamping.
    pub raw_score: f64,
    pub tier: String,
    /// Fired rules, ordered by contribution magnitude descending.
    pub factors: Vec<FactorContribution>,
    /// Present when clamping changed the reported score.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub clamp: Option<FactorContribution>,
    pub typologies: Vec<Typology>,
    pub evidence: AlertEvidence,
}

impl Alert {
    /// Sum of rule contributions in decomposition order.
    pub fn decomposition_sum(&self) -> f64 {
        self.factors.iter().fold(0.0, |acc, f| acc + f.contribution)
    }

    /// Human-readable reasons, one per fired rule.
    pub fn reasons(&self) -> Vec<&str> {
        self.factors.iter().map(|f| f.reason.as_str()).collect()
    }

    pub fn was_clamped(&self) -> bool {
        self.clamp.is_some()
    }
}
