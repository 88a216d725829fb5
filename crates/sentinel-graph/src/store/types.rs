use std::collections::BTreeMap;

use sentinel_core::{NodeId, NodeLabel};
use serde::{Deserialize, Serialize};

/// A node in the transaction graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionNode {
    pub id: NodeId,
    pub label: NodeLabel,
    /// Named structural features carried from ingestion. Ordered so that
    /// serialized output is stable.
    pub features: BTreeMap<String, f64>,
}

impl TransactionNode {
    pub fn is_illicit(&self) -> bool {
        self.label.is_illicit()
    }

    pub fn feature(&self, name: &str) -> Option<f64> {
        self.features.get(name).copied()
    }
}

/// Summary counts for a graph, logged at run start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub illicit: usize,
    pub licit: usize,
    pub unknown: usize,
    /// Nodes with no incident edge.
    pub isolated: usize,
}
