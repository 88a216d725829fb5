use criterion::{criterion_group, criterion_main, Criterion};

use sentinel_core::config::{FeatureConfig, PropagationConfig, SentinelConfig};
use sentinel_engine::run;
use sentinel_features::FeatureExtractor;
use sentinel_propagation::PropagationEngine;
use test_fixtures::{synthetic_graph, SyntheticSpec};

/// 10K nodes, ~30K edges, one illicit node in 50.
fn bench_graph() -> sentinel_engine::TransactionGraph {
    synthetic_graph(SyntheticSpec {
        nodes: 10_000,
        out_degree: 3,
        illicit_every: 50,
        seed: 7,
    })
}

fn bench_features(c: &mut Criterion) {
    let graph = bench_graph();
    let extractor = FeatureExtractor::new(FeatureConfig::default());
    c.bench_function("features_10k_nodes", |b| {
        b.iter(|| extractor.extract(&graph));
    });
}

fn bench_propagation(c: &mut Criterion) {
    let graph = bench_graph();
    let mut group = c.benchmark_group("propagation_10k_nodes");
    for max_hops in [1u32, 2, 3] {
        let engine = PropagationEngine::new(PropagationConfig {
            max_hops,
            ..PropagationConfig::default()
        })
        .expect("bench hop bound is valid");
        group.bench_function(format!("max_hops_{max_hops}"), |b| {
            b.iter(|| engine.propagate(&graph));
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let graph = bench_graph();
    let config = SentinelConfig::default();
    c.bench_function("full_pipeline_10k_nodes", |b| {
        b.iter(|| run(&graph, &config));
    });
}

criterion_group!(benches, bench_features, bench_propagation, bench_full_pipeline);
criterion_main!(benches);
