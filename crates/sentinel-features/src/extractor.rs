//! Parallel per-node feature extraction.

use std::time::Instant;

use rayon::prelude::*;
use sentinel_core::config::FeatureConfig;
use sentinel_core::{Direction, GraphError, NodeId};
use sentinel_graph::TransactionGraph;

use crate::neighborhood::{illicit_share, strict_two_hop, top_illicit};
use crate::types::{FeatureTable, NodeFeatures};

/// Computes [`NodeFeatures`] for every node of a graph.
///
/// Each node is independent, so the table is built with a parallel map whose
/// indexed collect keeps ascending id order. Two extractions of an unchanged
/// graph are identical.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Features for all nodes.
    pub fn extract(&self, graph: &TransactionGraph) -> Result<FeatureTable, GraphError> {
        let start = Instant::now();
        let ids: Vec<&NodeId> = graph.node_ids().collect();
        let rows = ids
            .par_iter()
            .map(|id| self.extract_node(graph, id))
            .collect::<Result<Vec<_>, _>>()?;
        let table = FeatureTable::from_sorted(rows);

        tracing::debug!(
            nodes = table.len(),
            rapid_fan_out = table.rapid_fan_out_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "features extracted"
        );
        Ok(table)
    }

    /// Features for a single node.
    pub fn extract_node(
        &self,
        graph: &TransactionGraph,
        id: &NodeId,
    ) -> Result<NodeFeatures, GraphError> {
        let label = graph
            .label(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })?;
        let fan_in = graph.degree(id, Direction::Incoming)?;
        let fan_out = graph.degree(id, Direction::Outgoing)?;

        let direct = graph.neighbors(id, Direction::Both)?;
        let (illicit_neighbor_count, illicit_neighbor_ratio) = illicit_share(graph, &direct);
        let illicit_neighbors_1hop =
            top_illicit(graph, &direct, self.config.evidence_neighbor_limit);

        let (
            two_hop_neighbor_count,
            illicit_two_hop_count,
            illicit_two_hop_ratio,
            illicit_neighbors_2hop,
        ) = if self.config.compute_two_hop {
            let two_hop = strict_two_hop(graph, id, &direct)?;
            let (count, ratio) = illicit_share(graph, &two_hop);
            let top = top_illicit(graph, &two_hop, self.config.evidence_neighbor_limit);
            (two_hop.len(), count, ratio, top)
        } else {
            (0, 0, 0.0, Vec::new())
        };

        Ok(NodeFeatures {
            node_id: id.clone(),
            label,
            fan_in,
            fan_out,
            neighbor_count: direct.len(),
            illicit_neighbor_count,
            illicit_neighbor_ratio,
            two_hop_neighbor_count,
            illicit_two_hop_count,
            illicit_two_hop_ratio,
            rapid_fan_out: self.is_rapid_fan_out(fan_in, fan_out),
            high_fan_in: fan_in >= self.config.high_fan_in_threshold,
            high_fan_out: fan_out >= self.config.fan_out_threshold,
            illicit_neighbors_1hop,
            illicit_neighbors_2hop,
        })
    }

    /// Fan-out reaches its threshold while fan-in stays at or below its own.
    pub fn is_rapid_fan_out(&self, fan_in: usize, fan_out: usize) -> bool {
        fan_out >= self.config.fan_out_threshold && fan_in <= self.config.fan_in_threshold
    }
}
