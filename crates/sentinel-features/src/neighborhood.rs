//! Undirected neighborhood queries used by the extractor.

use std::collections::BTreeSet;

use sentinel_core::{Direction, GraphError, NodeId};
use sentinel_graph::TransactionGraph;

/// Nodes exactly two undirected hops from `id`: neighbors of neighbors,
/// excluding `id` itself and its direct neighbors. Ascending order.
pub fn strict_two_hop<'g>(
    graph: &'g TransactionGraph,
    id: &NodeId,
    direct: &BTreeSet<&'g NodeId>,
) -> Result<BTreeSet<&'g NodeId>, GraphError> {
    let mut two_hop = BTreeSet::new();
    for &neighbor in direct {
        for candidate in graph.neighbors(neighbor, Direction::Both)? {
            if candidate != id && !direct.contains(candidate) {
                two_hop.insert(candidate);
            }
        }
    }
    Ok(two_hop)
}

/// Count of illicit members and `count / total`, 0 for an empty set.
pub fn illicit_share(graph: &TransactionGraph, ids: &BTreeSet<&NodeId>) -> (usize, f64) {
    let illicit = ids.iter().filter(|&&n| graph.is_illicit(n)).count();
    if ids.is_empty() {
        (0, 0.0)
    } else {
        (illicit, illicit as f64 / ids.len() as f64)
    }
}

/// First `limit` illicit members in ascending order.
pub fn top_illicit(graph: &TransactionGraph, ids: &BTreeSet<&NodeId>, limit: usize) -> Vec<NodeId> {
    ids.iter()
        .filter(|&&n| graph.is_illicit(n))
        .take(limit)
        .map(|&n| n.clone())
        .collect()
}
