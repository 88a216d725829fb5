//! Fluent graph construction for tests.

use std::collections::BTreeMap;

use sentinel_core::{NodeId, NodeLabel};
use sentinel_graph::TransactionGraph;

/// Builds a [`TransactionGraph`], panicking on integrity violations.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: TransactionGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, id: &str, label: NodeLabel) -> Self {
        self.graph
            .add_node(id, BTreeMap::new(), label)
            .unwrap_or_else(|e| panic!("fixture node {id}: {e}"));
        self
    }

    pub fn illicit(self, id: &str) -> Self {
        self.node(id, NodeLabel::Illicit)
    }

    pub fn licit(self, id: &str) -> Self {
        self.node(id, NodeLabel::Licit)
    }

    pub fn unknown(self, id: &str) -> Self {
        self.node(id, NodeLabel::Unknown)
    }

    /// Add an unlabeled node carrying named features.
    pub fn node_with_features(mut self, id: &str, features: &[(&str, f64)]) -> Self {
        let features = features
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect();
        self.graph
            .add_node(id, features, NodeLabel::Unknown)
            .unwrap_or_else(|e| panic!("fixture node {id}: {e}"));
        self
    }

    pub fn edge(mut self, src: &str, dst: &str) -> Self {
        self.graph
            .add_edge(&NodeId::from(src), &NodeId::from(dst))
            .unwrap_or_else(|e| panic!("fixture edge {src}->{dst}: {e}"));
        self
    }

    pub fn edges(self, pairs: &[(&str, &str)]) -> Self {
        pairs.iter().fold(self, |b, (s, d)| b.edge(s, d))
    }

    pub fn build(self) -> TransactionGraph {
        self.graph
    }
}

/// `A (illicit) -> B -> C`.
pub fn abc_chain() -> TransactionGraph {
    GraphBuilder::new()
        .illicit("A")
        .unknown("B")
        .unknown("C")
        .edges(&[("A", "B"), ("B", "C")])
        .build()
}

/// `n0 -> n1 -> ... -> n{len-1}` with `n0` illicit. Ids are zero-padded so
/// lexicographic order follows the chain.
pub fn chain(len: usize) -> TransactionGraph {
    let ids: Vec<String> = (0..len).map(|i| format!("n{i:03}")).collect();
    let mut builder = GraphBuilder::new();
    for (i, id) in ids.iter().enumerate() {
        builder = if i == 0 {
            builder.illicit(id)
        } else {
            builder.unknown(id)
        };
    }
    for pair in ids.windows(2) {
        builder = builder.edge(&pair[0], &pair[1]);
    }
    builder.build()
}

/// `hub` sends to `fan_out` receivers and receives from `fan_in` senders.
/// Receivers are `out_*`, senders `in_*`; nothing is illicit.
pub fn fan_out_hub(fan_out: usize, fan_in: usize) -> TransactionGraph {
    let mut builder = GraphBuilder::new().unknown("hub");
    for i in 0..fan_out {
        let id = format!("out_{i:03}");
        builder = builder.unknown(&id).edge("hub", &id);
    }
    for i in 0..fan_in {
        let id = format!("in_{i:03}");
        builder = builder.unknown(&id).edge(&id, "hub");
    }
    builder.build()
}

/// `hub` collects from `senders` nodes, the first `illicit` of which are illicit.
pub fn fan_in_hub(senders: usize, illicit: usize) -> TransactionGraph {
    let mut builder = GraphBuilder::new().unknown("hub");
    for i in 0..senders {
        let id = format!("src_{i:03}");
        builder = if i < illicit {
            builder.illicit(&id)
        } else {
            builder.licit(&id)
        };
        builder = builder.edge(&id, "hub");
    }
    builder.build()
}
