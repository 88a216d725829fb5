//! The transaction graph: nodes, directed fund-flow edges, ordered lookups.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction as EdgeDirection;
use sentinel_core::{Direction, GraphError, NodeId, NodeLabel};

use super::types::{GraphStats, TransactionNode};

/// Directed transaction graph.
///
/// Node ids are indexed in a `BTreeMap` so every iteration the graph exposes
/// runs in ascending id order, independent of insertion order. Parallel
/// edges are never stored and self-loops are rejected.
#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    graph: StableDiGraph<TransactionNode, ()>,
    node_index: BTreeMap<NodeId, NodeIndex>,
}

impl TransactionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Fails with `DuplicateNode` if the id already exists.
    pub fn add_node(
        &mut self,
        id: impl Into<NodeId>,
        features: BTreeMap<String, f64>,
        label: NodeLabel,
    ) -> Result<NodeIndex, GraphError> {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id: id.to_string() });
        }
        let idx = self.graph.add_node(TransactionNode {
            id: id.clone(),
            label,
            features,
        });
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Add a directed edge `src -> dst`.
    ///
    /// Returns `Ok(false)` when the edge already exists (duplicates merge).
    /// Fails with `UnknownNode` if either endpoint is absent and with
    /// `SelfLoop` when `src == dst`.
    pub fn add_edge(&mut self, src: &NodeId, dst: &NodeId) -> Result<bool, GraphError> {
        let a = self.require(src)?;
        let b = self.require(dst)?;
        if a == b {
            return Err(GraphError::SelfLoop { id: src.to_string() });
        }
        if self.graph.find_edge(a, b).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(a, b, ());
        Ok(true)
    }

    /// Adjacent ids of `id` in ascending order.
    ///
    /// `Both` is the union of senders and receivers, so a counterparty on
    /// both sides appears once.
    pub fn neighbors(
        &self,
        id: &NodeId,
        direction: Direction,
    ) -> Result<BTreeSet<&NodeId>, GraphError> {
        let idx = self.require(id)?;
        Ok(self.neighbors_of(idx, direction))
    }

    /// Adjacency by index. The index must come from this graph.
    pub(crate) fn neighbors_of(&self, idx: NodeIndex, direction: Direction) -> BTreeSet<&NodeId> {
        match direction {
            Direction::Incoming => self.directed_ids(idx, EdgeDirection::Incoming).collect(),
            Direction::Outgoing => self.directed_ids(idx, EdgeDirection::Outgoing).collect(),
            Direction::Both => self
                .directed_ids(idx, EdgeDirection::Incoming)
                .chain(self.directed_ids(idx, EdgeDirection::Outgoing))
                .collect(),
        }
    }

    fn directed_ids(
        &self,
        idx: NodeIndex,
        dir: EdgeDirection,
    ) -> impl Iterator<Item = &NodeId> + '_ {
        self.graph
            .neighbors_directed(idx, dir)
            .filter_map(move |n| self.graph.node_weight(n))
            .map(|n| &n.id)
    }

    /// Number of distinct adjacent ids.
    pub fn degree(&self, id: &NodeId, direction: Direction) -> Result<usize, GraphError> {
        let idx = self.require(id)?;
        Ok(match direction {
            // Parallel edges are never stored, so edge counts are neighbor counts.
            Direction::Incoming => self
                .graph
                .neighbors_directed(idx, EdgeDirection::Incoming)
                .count(),
            Direction::Outgoing => self
                .graph
                .neighbors_directed(idx, EdgeDirection::Outgoing)
                .count(),
            Direction::Both => self.neighbors_of(idx, Direction::Both).len(),
        })
    }

    pub fn node(&self, id: &NodeId) -> Option<&TransactionNode> {
        self.node_index
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn label(&self, id: &NodeId) -> Option<NodeLabel> {
        self.node(id).map(|n| n.label)
    }

    pub fn is_illicit(&self, id: &NodeId) -> bool {
        self.label(id).is_some_and(NodeLabel::is_illicit)
    }

    pub fn contains_edge(&self, src: &NodeId, dst: &NodeId) -> bool {
        match (self.node_index.get(src), self.node_index.get(dst)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &TransactionNode> + '_ {
        self.node_index
            .values()
            .filter_map(move |&idx| self.graph.node_weight(idx))
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.node_index.keys()
    }

    /// Illicit nodes (propagation seeds) in ascending id order.
    pub fn seeds(&self) -> Vec<&NodeId> {
        self.nodes().filter(|n| n.is_illicit()).map(|n| &n.id).collect()
    }

    /// All edges as `(src, dst)` pairs, ordered by source then destination.
    pub fn edges(&self) -> Vec<(&NodeId, &NodeId)> {
        self.node_index
            .iter()
            .flat_map(|(src, &idx)| {
                self.neighbors_of(idx, Direction::Outgoing)
                    .into_iter()
                    .map(move |dst| (src, dst))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            ..GraphStats::default()
        };
        for &idx in self.node_index.values() {
            let Some(node) = self.graph.node_weight(idx) else {
                continue;
            };
            match node.label {
                NodeLabel::Illicit => stats.illicit += 1,
                NodeLabel::Licit => stats.licit += 1,
                NodeLabel::Unknown => stats.unknown += 1,
            }
            if self.graph.neighbors_undirected(idx).next().is_none() {
                stats.isolated += 1;
            }
        }
        stats
    }

    fn require(&self, id: &NodeId) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn graph(nodes: &[(&str, NodeLabel)], edges: &[(&str, &str)]) -> TransactionGraph {
        let mut g = TransactionGraph::new();
        for (n, label) in nodes {
            g.add_node(*n, BTreeMap::new(), *label).unwrap();
        }
        for (s, d) in edges {
            g.add_edge(&id(s), &id(d)).unwrap();
        }
        g
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut g = TransactionGraph::new();
        g.add_node("a", BTreeMap::new(), NodeLabel::Unknown).unwrap();
        let err = g.add_node("a", BTreeMap::new(), NodeLabel::Licit).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode { id: "a".into() });
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.label(&id("a")), Some(NodeLabel::Unknown));
    }

    #[test]
    fn test_edge_to_unknown_node_rejected() {
        let mut g = graph(&[("a", NodeLabel::Unknown)], &[]);
        let err = g.add_edge(&id("a"), &id("zz")).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { id: "zz".into() });
        let err = g.add_edge(&id("yy"), &id("a")).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { id: "yy".into() });
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut g = graph(&[("a", NodeLabel::Unknown), ("b", NodeLabel::Unknown)], &[]);
        assert!(g.add_edge(&id("a"), &id("b")).unwrap());
        assert!(!g.add_edge(&id("a"), &id("b")).unwrap());
        assert_eq!(g.edge_count(), 1);
        // The reverse direction is a distinct edge.
        assert!(g.add_edge(&id("b"), &id("a")).unwrap());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = graph(&[("a", NodeLabel::Unknown)], &[]);
        let err = g.add_edge(&id("a"), &id("a")).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { id: "a".into() });
    }

    #[test]
    fn test_neighbors_by_direction() {
        let g = graph(
            &[
                ("a", NodeLabel::Unknown),
                ("b", NodeLabel::Unknown),
                ("c", NodeLabel::Unknown),
            ],
            &[("a", "b"), ("c", "b"), ("b", "c")],
        );
        let b = id("b");
        let incoming: Vec<_> = g.neighbors(&b, Direction::Incoming).unwrap().into_iter().collect();
        let outgoing: Vec<_> = g.neighbors(&b, Direction::Outgoing).unwrap().into_iter().collect();
        let both: Vec<_> = g.neighbors(&b, Direction::Both).unwrap().into_iter().collect();
        assert_eq!(incoming, vec![&id("a"), &id("c")]);
        assert_eq!(outgoing, vec![&id("c")]);
        assert_eq!(both, vec![&id("a"), &id("c")]);
        assert_eq!(g.degree(&b, Direction::Both).unwrap(), 2);
    }

    #[test]
    fn test_neighbors_unknown_id() {
        let g = TransactionGraph::new();
        assert!(matches!(
            g.neighbors(&id("ghost"), Direction::Both),
            Err(GraphError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_iteration_is_sorted_regardless_of_insertion() {
        let g = graph(
            &[
                ("c", NodeLabel::Illicit),
                ("a", NodeLabel::Licit),
                ("b", NodeLabel::Illicit),
            ],
            &[("c", "a"), ("b", "a")],
        );
        let ids: Vec<_> = g.node_ids().map(NodeId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let seeds: Vec<_> = g.seeds().into_iter().map(NodeId::as_str).collect();
        assert_eq!(seeds, vec!["b", "c"]);
        let edges: Vec<_> = g
            .edges()
            .into_iter()
            .map(|(s, d)| (s.as_str(), d.as_str()))
            .collect();
        assert_eq!(edges, vec![("b", "a"), ("c", "a")]);
    }

    #[test]
    fn test_stats() {
        let g = graph(
            &[
                ("a", NodeLabel::Illicit),
                ("b", NodeLabel::Licit),
                ("c", NodeLabel::Unknown),
                ("d", NodeLabel::Unknown),
            ],
            &[("a", "b")],
        );
        let stats = g.stats();
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.edges, 1);
        assert_eq!(stats.illicit, 1);
        assert_eq!(stats.licit, 1);
        assert_eq!(stats.unknown, 2);
        assert_eq!(stats.isolated, 2);
    }
}
