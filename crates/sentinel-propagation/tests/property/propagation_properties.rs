//! Property tests for sentinel-propagation: boundedness, monotonicity,
//! determinism, and insensitivity to worker count.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use proptest::prelude::*;

use sentinel_core::config::{AccumulationPolicy, PropagationConfig};
use sentinel_core::{Direction, NodeId};
use sentinel_graph::TransactionGraph;
use sentinel_propagation::PropagationEngine;
use test_fixtures::{synthetic_graph, SyntheticSpec};

/// Shortest distance from any seed, walking the propagation direction and
/// never passing through a seed.
fn seed_distances(graph: &TransactionGraph, direction: Direction) -> BTreeMap<NodeId, u32> {
    let seeds: BTreeSet<&NodeId> = graph.seeds().into_iter().collect();
    let mut dist: BTreeMap<NodeId, u32> = BTreeMap::new();
    let mut queue: VecDeque<(&NodeId, u32)> = VecDeque::new();
    for &seed in &seeds {
        queue.push_back((seed, 0));
    }
    while let Some((node, d)) = queue.pop_front() {
        if d > 0 && seeds.contains(node) {
            continue;
        }
        for next in graph.neighbors(node, direction).unwrap() {
            if seeds.contains(next) || dist.contains_key(next) {
                continue;
            }
            dist.insert(next.clone(), d + 1);
            queue.push_back((next, d + 1));
        }
    }
    dist
}

fn policy() -> impl Strategy<Value = AccumulationPolicy> {
    prop_oneof![Just(AccumulationPolicy::Additive), Just(AccumulationPolicy::MaxPath)]
}

fn spec() -> impl Strategy<Value = SyntheticSpec> {
    (2usize..80, 1usize..4, 2usize..10, any::<u64>()).prop_map(|(nodes, out_degree, illicit_every, seed)| {
        SyntheticSpec {
            nodes,
            out_degree,
            illicit_every,
            seed,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Nodes beyond max_hops of every seed have zero exposure, and no
    /// contribution is recorded past the bound.
    #[test]
    fn prop_exposure_is_bounded(
        spec in spec(),
        max_hops in 1u32..4,
        directional in any::<bool>(),
        accumulation in policy(),
    ) {
        let graph = synthetic_graph(spec);
        let config = PropagationConfig { max_hops, directional, accumulation, ..PropagationConfig::default() };
        let direction = if directional { Direction::Outgoing } else { Direction::Both };
        let map = PropagationEngine::new(config).unwrap().propagate(&graph).unwrap();
        let dist = seed_distances(&graph, direction);

        for record in &map {
            match dist.get(&record.node_id) {
                Some(&d) if d <= max_hops => {
                    prop_assert!(record.total > 0.0);
                    prop_assert_eq!(record.contributions.iter().map(|c| c.hop).min(), Some(d));
                }
                _ => prop_assert_eq!(record.total, 0.0),
            }
            prop_assert!(record.contributions.iter().all(|c| c.hop >= 1 && c.hop <= max_hops));
        }
    }

    /// Increasing the injected mass never decreases any exposure.
    #[test]
    fn prop_exposure_is_monotone_in_mass(
        spec in spec(),
        low in 0.5f64..20.0,
        bump in 0.0f64..20.0,
        accumulation in policy(),
    ) {
        let graph = synthetic_graph(spec);
        let run = |mass: f64| {
            let config = PropagationConfig { seed_injection_mass: mass, accumulation, ..PropagationConfig::default() };
            PropagationEngine::new(config).unwrap().propagate(&graph).unwrap()
        };
        let small = run(low);
        let large = run(low + bump);
        for (a, b) in small.iter().zip(large.iter()) {
            prop_assert_eq!(&a.node_id, &b.node_id);
            prop_assert!(b.total >= a.total);
        }
    }

    /// Same graph, same config: bit-identical output.
    #[test]
    fn prop_propagation_is_deterministic(spec in spec(), accumulation in policy()) {
        let graph = synthetic_graph(spec);
        let engine = PropagationEngine::new(PropagationConfig { accumulation, ..PropagationConfig::default() }).unwrap();
        let first = engine.propagate(&graph).unwrap();
        let second = engine.propagate(&graph).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A single worker and the default pool produce the same bits.
    #[test]
    fn prop_worker_count_does_not_matter(spec in spec()) {
        let graph = synthetic_graph(spec);
        let engine = PropagationEngine::default();
        let parallel = engine.propagate(&graph).unwrap();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let sequential = pool.install(|| engine.propagate(&graph).unwrap());
        prop_assert_eq!(parallel, sequential);
    }

    /// Every record total equals the sum of its contributions in stored order.
    #[test]
    fn prop_total_is_sum_of_contributions(spec in spec()) {
        let graph = synthetic_graph(spec);
        let map = PropagationEngine::default().propagate(&graph).unwrap();
        for record in &map {
            let sum = record.contributions.iter().fold(0.0, |acc, c| acc + c.mass);
            prop_assert_eq!(sum.to_bits(), record.total.to_bits());
        }
    }
}
