//! Property tests for the end-to-end pipeline.

use proptest::prelude::*;

use sentinel_core::config::SentinelConfig;
use sentinel_engine::run;
use test_fixtures::{synthetic_graph, SyntheticSpec};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Same graph and configuration: the same alert bytes, every time.
    #[test]
    fn prop_pipeline_is_deterministic(seed in any::<u64>(), nodes in 1usize..150, hops in 1u32..4) {
        let graph = synthetic_graph(SyntheticSpec { nodes, out_degree: 2, illicit_every: 9, seed });
        let mut config = SentinelConfig::default();
        config.propagation.max_hops = hops;
        let a = serde_json::to_vec(&run(&graph, &config).unwrap()).unwrap();
        let b = serde_json::to_vec(&run(&graph, &config).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Every alert decomposes into its factors plus the clamp adjustment,
    /// and the output is ordered.
    #[test]
    fn prop_alerts_decompose_and_are_ordered(seed in any::<u64>(), nodes in 1usize..150) {
        let graph = synthetic_graph(SyntheticSpec { nodes, out_degree: 3, illicit_every: 4, seed });
        let config = SentinelConfig::default();
        let alerts = run(&graph, &config).unwrap();
        for alert in &alerts {
            prop_assert_eq!(alert.decomposition_sum().to_bits(), alert.raw_score.to_bits());
            let adjustment = alert.clamp.as_ref().map_or(0.0, |c| c.contribution);
            prop_assert!((alert.raw_score + adjustment - alert.score).abs() < 1e-9);
            prop_assert!(alert.score >= config.alerts.severity_threshold);
        }
        for pair in alerts.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].node_id < pair[1].node_id)
            );
        }
    }
}
