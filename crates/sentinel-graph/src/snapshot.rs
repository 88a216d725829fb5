//! Serializable graph snapshot.
//!
//! The hand-off format between an ingestion collaborator and the engine:
//! plain node and edge lists that build a validated [`TransactionGraph`].

use std::collections::BTreeMap;

use sentinel_core::{GraphError, NodeId, NodeLabel};
use serde::{Deserialize, Serialize};

use crate::store::TransactionGraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub label: NodeLabel,
    #[serde(default)]
    pub features: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub destination: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// Build the graph. Nodes are inserted before edges; the first
    /// structural violation aborts construction.
    pub fn build(&self) -> Result<TransactionGraph, GraphError> {
        let mut graph = TransactionGraph::new();
        for node in &self.nodes {
            graph.add_node(node.id.clone(), node.features.clone(), node.label)?;
        }
        let mut merged = 0usize;
        for edge in &self.edges {
            if !graph.add_edge(&edge.source, &edge.destination)? {
                merged += 1;
            }
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            merged_duplicates = merged,
            "graph built from snapshot"
        );
        Ok(graph)
    }

    /// Capture a graph as node and edge lists in canonical order.
    pub fn from_graph(graph: &TransactionGraph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|n| NodeRecord {
                    id: n.id.clone(),
                    label: n.label,
                    features: n.features.clone(),
                })
                .collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(s, d)| EdgeRecord {
                    source: s.clone(),
                    destination: d.clone(),
                })
                .collect(),
        }
    }
}
