//! Structural evidence attached to alerts.

use sentinel_core::{AlertEvidence, ExposureRecord};
use sentinel_features::NodeFeatures;

/// Evidence block for a node. Seeds have no exposure record and report zero mass.
pub fn build(features: &NodeFeatures, exposure: Option<&ExposureRecord>) -> AlertEvidence {
    AlertEvidence {
        label: features.label,
        fan_in: features.fan_in,
        fan_out: features.fan_out,
        neighbor_count: features.neighbor_count,
        illicit_neighbor_count: features.illicit_neighbor_count,
        illicit_neighbor_ratio: features.illicit_neighbor_ratio,
        two_hop_neighbor_count: features.two_hop_neighbor_count,
        illicit_two_hop_count: features.illicit_two_hop_count,
        illicit_two_hop_ratio: features.illicit_two_hop_ratio,
        exposure_mass: exposure.map_or(0.0, |r| r.total),
        illicit_neighbors_1hop: features.illicit_neighbors_1hop.clone(),
        illicit_neighbors_2hop: features.illicit_neighbors_2hop.clone(),
    }
}
