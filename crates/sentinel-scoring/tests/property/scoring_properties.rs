//! Property tests for sentinel-scoring: decomposition-sum and range.

use proptest::prelude::*;

use sentinel_core::config::{RuleWeights, ScoringConfig};
use sentinel_core::FactorKind;
use sentinel_features::FeatureExtractor;
use sentinel_propagation::PropagationEngine;
use sentinel_scoring::ScoringEngine;
use test_fixtures::{synthetic_graph, SyntheticSpec};

fn weights() -> impl Strategy<Value = RuleWeights> {
    (
        0.0f64..80.0,
        0.0f64..40.0,
        0.0f64..80.0,
        0.0f64..80.0,
        0.0f64..40.0,
        0.0f64..10.0,
    )
        .prop_map(|(a, b, c, d, e, f)| RuleWeights {
            rapid_fan_out: a,
            high_fan_out: b,
            high_fan_in: c,
            direct_exposure: d,
            indirect_exposure: e,
            propagated_exposure: f,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Factors sum exactly to the raw score, and the clamp factor explains
    /// any gap to the reported score.
    #[test]
    fn prop_decomposition_sums_to_raw_score(
        seed in any::<u64>(),
        nodes in 2usize..80,
        weights in weights(),
        ceiling in 5.0f64..150.0,
    ) {
        let graph = synthetic_graph(SyntheticSpec { nodes, out_degree: 3, illicit_every: 6, seed });
        let features = FeatureExtractor::default().extract(&graph).unwrap();
        let exposure = PropagationEngine::default().propagate(&graph).unwrap();
        let scoring = ScoringConfig { rule_weights: weights, score_floor: 0.0, score_ceiling: ceiling };
        let table = ScoringEngine::new(scoring).unwrap().score(&features, &exposure);

        for row in &table {
            prop_assert_eq!(row.decomposition_sum().to_bits(), row.raw_score.to_bits());
            prop_assert!(row.score >= 0.0 && row.score <= ceiling);
            match &row.clamp {
                Some(clamp) => {
                    prop_assert_eq!(clamp.rule, FactorKind::ScoreClamp);
                    prop_assert!((row.raw_score + clamp.contribution - row.score).abs() < 1e-9);
                }
                None => prop_assert_eq!(row.raw_score, row.score),
            }
            prop_assert!(row.factors.iter().all(|f| f.rule.is_rule() && f.contribution >= 0.0));
            prop_assert!(row.factors.windows(2).all(|w| w[0].contribution.abs() >= w[1].contribution.abs()));
        }
    }
}
