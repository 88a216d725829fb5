//! Alert Generator integration tests.

use sentinel_alerts::AlertGenerator;
use sentinel_core::config::{AlertConfig, FeatureConfig, SentinelConfig};
use sentinel_core::{Alert, AlertError, FactorKind, NodeId, SentinelErrorCode, SeverityTier, Typology};
use sentinel_features::{FeatureExtractor, FeatureTable};
use sentinel_graph::TransactionGraph;
use sentinel_propagation::PropagationEngine;
use sentinel_scoring::ScoringEngine;
use test_fixtures::{abc_chain, fan_out_hub, load_graph};

fn alerts_with(graph: &TransactionGraph, config: &SentinelConfig) -> Result<Vec<Alert>, AlertError> {
    let features = FeatureExtractor::new(config.features.clone()).extract(graph).unwrap();
    let exposure = PropagationEngine::new(config.propagation.clone())
        .unwrap()
        .propagate(graph)
        .unwrap();
    let scores = ScoringEngine::new(config.scoring.clone())
        .unwrap()
        .score(&features, &exposure);
    AlertGenerator::new(config.alerts.clone())
        .unwrap()
        .generate(graph, &features, &exposure, &scores)
}

fn small_thresholds() -> SentinelConfig {
    SentinelConfig {
        features: FeatureConfig {
            fan_out_threshold: 4,
            fan_in_threshold: 2,
            high_fan_in_threshold: 5,
            ..FeatureConfig::default()
        },
        ..SentinelConfig::default()
    }
}

#[test]
fn test_empty_graph_fails() {
    let err = alerts_with(&TransactionGraph::new(), &SentinelConfig::default()).unwrap_err();
    assert_eq!(err, AlertError::EmptyGraph);
    assert_eq!(err.error_code(), "EMPTY_GRAPH");
}

/// A graph with nodes but nothing above threshold yields no alerts, not an error.
#[test]
fn test_quiet_graph_yields_no_alerts() {
    let graph = test_fixtures::GraphBuilder::new()
        .licit("a")
        .licit("b")
        .edge("a", "b")
        .build();
    assert!(alerts_with(&graph, &SentinelConfig::default()).unwrap().is_empty());
}

#[test]
fn test_abc_chain_alert() {
    let alerts = alerts_with(&abc_chain(), &SentinelConfig::default()).unwrap();
    // B scores 40 (medium); C scores 20, below the threshold of 25.
    assert_eq!(alerts.len(), 1);
    let b = &alerts[0];
    assert_eq!(b.node_id, NodeId::from("B"));
    assert_eq!(b.score, 40.0);
    assert_eq!(b.tier, "medium");
    assert_eq!(b.evidence.exposure_mass, 10.0);
    assert_eq!(b.evidence.illicit_neighbors_1hop, vec![NodeId::from("A")]);
    assert_eq!(b.typologies, vec![Typology::Unknown]);
    assert_eq!(b.decomposition_sum(), b.raw_score);
}

#[test]
fn test_ordering_and_tiers() {
    let graph = load_graph("mixed_typologies");
    let alerts = alerts_with(&graph, &small_thresholds()).unwrap();
    assert!(!alerts.is_empty());

    for pair in alerts.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score > b.score || (a.score == b.score && a.node_id < b.node_id));
    }
    for alert in &alerts {
        assert!(alert.score >= 25.0);
        let expected = match alert.score {
            s if s >= 75.0 => "critical",
            s if s >= 50.0 => "high",
            _ => "medium",
        };
        assert_eq!(alert.tier, expected);
    }
    // One alert per node.
    let mut ids: Vec<_> = alerts.iter().map(|a| a.node_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), alerts.len());
}

#[test]
fn test_typologies_on_fixture() {
    let graph = load_graph("mixed_typologies");
    let alerts = alerts_with(&graph, &small_thresholds()).unwrap();
    let find = |id: &str| alerts.iter().find(|a| a.node_id.as_str() == id).unwrap();

    assert_eq!(find("collector").typologies, vec![Typology::Aggregation]);
    assert_eq!(
        find("disperser").typologies,
        vec![Typology::Distribution, Typology::Layering]
    );
}

#[test]
fn test_min_tier_filters_lower_tiers() {
    let graph = load_graph("mixed_typologies");
    let mut config = small_thresholds();
    let all = alerts_with(&graph, &config).unwrap();

    config.alerts.min_tier = Some("high".to_string());
    let high = alerts_with(&graph, &config).unwrap();
    assert!(high.iter().all(|a| a.tier == "high" || a.tier == "critical"));
    assert_eq!(
        high.len(),
        all.iter().filter(|a| a.score >= 50.0).count()
    );
}

#[test]
fn test_custom_tiers() {
    let mut config = SentinelConfig::default();
    config.alerts = AlertConfig {
        severity_threshold: 5.0,
        min_tier: None,
        severity_tiers: vec![SeverityTier::new(0.0, "watch"), SeverityTier::new(30.0, "escalate")],
    };
    let alerts = alerts_with(&abc_chain(), &config).unwrap();
    let tiers: Vec<_> = alerts
        .iter()
        .map(|a| (a.node_id.as_str(), a.tier.as_str()))
        .collect();
    assert_eq!(tiers, vec![("B", "escalate"), ("C", "watch")]);

    let c = &alerts[1].evidence;
    assert_eq!(c.two_hop_neighbor_count, 1);
    assert_eq!(c.illicit_two_hop_count, 1);
    assert_eq!(c.illicit_neighbors_2hop, vec![NodeId::from("A")]);
}

/// A score row with no matching feature row fails the whole generation.
#[test]
fn test_missing_feature_row_fails() {
    let graph = abc_chain();
    let features = FeatureExtractor::default().extract(&graph).unwrap();
    let exposure = PropagationEngine::default().propagate(&graph).unwrap();
    let scores = ScoringEngine::default().score(&features, &exposure);

    let err = AlertGenerator::default()
        .generate(&graph, &FeatureTable::default(), &exposure, &scores)
        .unwrap_err();
    assert_eq!(err, AlertError::MissingFeatures { id: "B".to_string() });
    assert_eq!(err.error_code(), "MISSING_FEATURES");
}

#[test]
fn test_generator_rejects_unknown_min_tier() {
    let config = AlertConfig {
        min_tier: Some("severe".to_string()),
        ..AlertConfig::default()
    };
    assert!(AlertGenerator::new(config).is_err());
}

#[test]
fn test_fan_out_alert_reason() {
    let alerts = alerts_with(&fan_out_hub(20, 1), &SentinelConfig::default()).unwrap();
    assert_eq!(alerts.len(), 1);
    let hub = &alerts[0];
    assert_eq!(hub.factors[0].rule, FactorKind::RapidFanOut);
    assert!(hub.reasons()[0].contains("sends to 20 counterparties"));
    assert_eq!(hub.typologies, vec![Typology::Distribution, Typology::Layering]);
}

/// Alerts serialize without needing the graph.
#[test]
fn test_alert_json_shape() {
    let alerts = alerts_with(&abc_chain(), &SentinelConfig::default()).unwrap();
    let value = serde_json::to_value(&alerts[0]).unwrap();
    assert_eq!(value["node_id"], "B");
    assert_eq!(value["tier"], "medium");
    assert_eq!(value["factors"][0]["rule"], "direct_exposure");
    assert!(value.get("clamp").is_none());
    assert_eq!(value["typologies"][0], "unknown");
}
