//! Structural typology hints.

use sentinel_core::Typology;
use sentinel_features::NodeFeatures;

/// Hints in fixed order: aggregation, distribution, layering. A node
/// matching none of them is `unknown`.
pub fn classify(features: &NodeFeatures) -> Vec<Typology> {
    let mut hints = Vec::with_capacity(3);
    if features.high_fan_in {
        hints.push(Typology::Aggregation);
    }
    if features.high_fan_out {
        hints.push(Typology::Distribution);
    }
    if features.rapid_fan_out {
        hints.push(Typology::Layering);
    }
    if hints.is_empty() {
        hints.push(Typology::Unknown);
    }
    hints
}
