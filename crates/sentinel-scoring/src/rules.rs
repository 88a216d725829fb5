//! The closed rule set.

use sentinel_core::config::RuleWeights;
use sentinel_core::{ExposureRecord, FactorContribution, FactorKind};
use sentinel_features::NodeFeatures;

/// Everything a rule may read about one node.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub features: &'a NodeFeatures,
    /// `None` for seeds, which receive no propagated exposure.
    pub exposure: Option<&'a ExposureRecord>,
}

/// A scoring rule. Rules are pure and independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// High fan-out relative to fan-in.
    RapidFanOut,
    /// Many distinct receivers, regardless of inflow.
    HighFanOut,
    /// Many distinct senders (aggregation).
    HighFanIn,
    /// Share of direct neighbors labeled illicit.
    DirectExposure,
    /// Share of strict two-hop neighbors labeled illicit.
    IndirectExposure,
    /// Mass received from illicit seeds within the hop bound.
    PropagatedExposure,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::RapidFanOut,
        Rule::HighFanOut,
        Rule::HighFanIn,
        Rule::DirectExposure,
        Rule::IndirectExposure,
        Rule::PropagatedExposure,
    ];

    pub fn kind(self) -> FactorKind {
        match self {
            Self::RapidFanOut => FactorKind::RapidFanOut,
            Self::HighFanOut => FactorKind::HighFanOut,
            Self::HighFanIn => FactorKind::HighFanIn,
            Self::DirectExposure => FactorKind::DirectExposure,
            Self::IndirectExposure => FactorKind::IndirectExposure,
            Self::PropagatedExposure => FactorKind::PropagatedExposure,
        }
    }

    pub fn name(self) -> &'static str {
        self.kind().as_str()
    }

    pub fn weight(self, weights: &RuleWeights) -> f64 {
        match self {
            Self::RapidFanOut => weights.rapid_fan_out,
            Self::HighFanOut => weights.high_fan_out,
            Self::HighFanIn => weights.high_fan_in,
            Self::DirectExposure => weights.direct_exposure,
            Self::IndirectExposure => weights.indirect_exposure,
            Self::PropagatedExposure => weights.propagated_exposure,
        }
    }

    /// Evaluate the rule. Returns `None` when it does not fire; a zero
    /// weight never fires.
    pub fn evaluate(self, input: RuleInput<'_>, weights: &RuleWeights) -> Option<FactorContribution> {
        let weight = self.weight(weights);
        if weight == 0.0 {
            return None;
        }
        let f = input.features;
        match self {
            Self::RapidFanOut => f.rapid_fan_out.then(|| {
                FactorContribution::new(
                    self.kind(),
                    weight,
                    format!(
                        "rapid fan-out: sends to {} counterparties while receiving from {}",
                        f.fan_out, f.fan_in
                    ),
                )
            }),
            Self::HighFanOut => f.high_fan_out.then(|| {
                FactorContribution::new(
                    self.kind(),
                    weight,
                    format!("high fan-out: sends to {} counterparties", f.fan_out),
                )
            }),
            Self::HighFanIn => f.high_fan_in.then(|| {
                FactorContribution::new(
                    self.kind(),
                    weight,
                    format!("high fan-in: receives from {} counterparties", f.fan_in),
                )
            }),
            Self::DirectExposure => (f.illicit_neighbor_ratio > 0.0).then(|| {
                FactorContribution::new(
                    self.kind(),
                    weight * f.illicit_neighbor_ratio,
                    format!(
                        "direct exposure: {} of {} direct neighbors are illicit ({:.1}%)",
                        f.illicit_neighbor_count,
                        f.neighbor_count,
                        f.illicit_neighbor_ratio * 100.0
                    ),
                )
            }),
            Self::IndirectExposure => (f.illicit_two_hop_ratio > 0.0).then(|| {
                FactorContribution::new(
                    self.kind(),
                    weight * f.illicit_two_hop_ratio,
                    format!(
                        "indirect exposure: {} of {} two-hop neighbors are illicit ({:.1}%)",
                        f.illicit_two_hop_count,
                        f.two_hop_neighbor_count,
                        f.illicit_two_hop_ratio * 100.0
                    ),
                )
            }),
            Self::PropagatedExposure => {
                let record = input.exposure.filter(|r| r.is_exposed())?;
                let dominant = record.dominant()?;
                Some(FactorContribution::new(
                    self.kind(),
                    weight * record.total,
                    format!(
                        "propagated exposure {:.3} from {} seed(s); strongest: {} at hop {} ({:.3})",
                        record.total,
                        record.seed_count(),
                        dominant.seed,
                        dominant.hop,
                        dominant.mass
                    ),
                ))
            }
        }
    }
}
