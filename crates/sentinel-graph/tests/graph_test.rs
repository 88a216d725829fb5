//! Graph Store integration tests.

use std::collections::BTreeMap;

use proptest::prelude::*;
use sentinel_core::{Direction, GraphError, NodeId, NodeLabel, SentinelErrorCode};
use sentinel_graph::{GraphSnapshot, TransactionGraph};

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

/// Adding A->B twice stores exactly one edge.
#[test]
fn test_duplicate_edge_scenario() {
    let mut g = TransactionGraph::new();
    g.add_node("A", BTreeMap::new(), NodeLabel::Illicit).unwrap();
    g.add_node("B", BTreeMap::new(), NodeLabel::Unknown).unwrap();
    g.add_edge(&id("A"), &id("B")).unwrap();
    g.add_edge(&id("A"), &id("B")).unwrap();

    assert_eq!(g.edge_count(), 1);
    assert!(g.contains_edge(&id("A"), &id("B")));
    assert!(!g.contains_edge(&id("B"), &id("A")));
    assert_eq!(g.neighbors(&id("B"), Direction::Incoming).unwrap().len(), 1);
}

#[test]
fn test_errors_carry_offending_id() {
    let mut g = TransactionGraph::new();
    g.add_node("230425980", BTreeMap::new(), NodeLabel::Unknown).unwrap();
    let err = g
        .add_node("230425980", BTreeMap::new(), NodeLabel::Unknown)
        .unwrap_err();
    assert_eq!(err.error_code(), "DUPLICATE_NODE");
    assert!(err.to_string().contains("230425980"));

    let err = g.add_edge(&id("230425980"), &id("5530458")).unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode { ref id } if id == "5530458"));
}

#[test]
fn test_isolated_node_has_no_neighbors() {
    let mut g = TransactionGraph::new();
    g.add_node("solo", BTreeMap::new(), NodeLabel::Licit).unwrap();
    for dir in [Direction::Incoming, Direction::Outgoing, Direction::Both] {
        assert!(g.neighbors(&id("solo"), dir).unwrap().is_empty());
    }
    assert_eq!(g.stats().isolated, 1);
}

proptest! {
    /// Insertion order never changes what the graph exposes.
    #[test]
    fn prop_insertion_order_is_irrelevant(
        edges in prop::collection::vec((0u8..12, 0u8..12), 0..40),
    ) {
        let ids: Vec<String> = (0..12).map(|i| format!("n{i:02}")).collect();
        let build = |reverse: bool| {
            let mut g = TransactionGraph::new();
            let order: Vec<&String> = if reverse { ids.iter().rev().collect() } else { ids.iter().collect() };
            for n in order {
                g.add_node(n.as_str(), BTreeMap::new(), NodeLabel::Unknown).unwrap();
            }
            let edge_order: Vec<&(u8, u8)> = if reverse { edges.iter().rev().collect() } else { edges.iter().collect() };
            for (s, d) in edge_order {
                if s != d {
                    g.add_edge(&NodeId::from(ids[*s as usize].as_str()), &NodeId::from(ids[*d as usize].as_str())).unwrap();
                }
            }
            GraphSnapshot::from_graph(&g)
        };
        prop_assert_eq!(build(false), build(true));
    }

    /// `Both` is always the union of `Incoming` and `Outgoing`.
    #[test]
    fn prop_both_is_union(edges in prop::collection::vec((0u8..8, 0u8..8), 0..30)) {
        let mut g = TransactionGraph::new();
        for i in 0..8u8 {
            g.add_node(format!("{i}"), BTreeMap::new(), NodeLabel::Unknown).unwrap();
        }
        for (s, d) in &edges {
            if s != d {
                g.add_edge(&NodeId::from(format!("{s}")), &NodeId::from(format!("{d}"))).unwrap();
            }
        }
        for i in 0..8u8 {
            let n = NodeId::from(format!("{i}"));
            let mut union = g.neighbors(&n, Direction::Incoming).unwrap();
            union.extend(g.neighbors(&n, Direction::Outgoing).unwrap());
            prop_assert_eq!(union, g.neighbors(&n, Direction::Both).unwrap());
        }
    }
}
