//! Feature records.

use sentinel_core::{NodeId, NodeLabel};
use serde::{Deserialize, Serialize};

/// Structural features of a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFeatures {
    pub node_id: NodeId,
    pub label: NodeLabel,
    /// Distinct senders.
    pub fan_in: usize,
    /// Distinct receivers.
    pub fan_out: usize,
    /// Distinct direct neighbors in either direction.
    pub neighbor_count: usize,
    pub illicit_neighbor_count: usize,
    /// `illicit_neighbor_count / neighbor_count`, 0 when there are no neighbors.
    pub illicit_neighbor_ratio: f64,
    /// Nodes exactly two undirected hops away (not the node, not a direct neighbor).
    pub two_hop_neighbor_count: usize,
    pub illicit_two_hop_count: usize,
    /// 0 when there are no strict two-hop neighbors.
    pub illicit_two_hop_ratio: f64,
    /// High fan-out relative to fan-in.
    pub rapid_fan_out: bool,
    /// Fan-in at or above the aggregation threshold.
    pub high_fan_in: bool,
    /// Fan-out at or above the fan-out threshold, regardless of fan-in.
    pub high_fan_out: bool,
    /// Illicit direct neighbors, ascending, truncated to the evidence limit.
    pub illicit_neighbors_1hop: Vec<NodeId>,
    /// Illicit strict two-hop neighbors, ascending, truncated to the evidence limit.
    pub illicit_neighbors_2hop: Vec<NodeId>,
}

/// Features for every node, sorted by node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    rows: Vec<NodeFeatures>,
}

impl FeatureTable {
    /// Build from rows already in ascending id order.
    pub(crate) fn from_sorted(rows: Vec<NodeFeatures>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].node_id < w[1].node_id));
        Self { rows }
    }

    pub fn get(&self, id: &NodeId) -> Option<&NodeFeatures> {
        self.rows
            .binary_search_by(|row| row.node_id.cmp(id))
            .ok()
            .map(|i| &self.rows[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeFeatures> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[NodeFeatures] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Nodes carrying the rapid fan-out flag.
    pub fn rapid_fan_out_count(&self) -> usize {
        self.rows.iter().filter(|r| r.rapid_fan_out).count()
    }
}

impl<'a> IntoIterator for &'a FeatureTable {
    type Item = &'a NodeFeatures;
    type IntoIter = std::slice::Iter<'a, NodeFeatures>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
