//! Score breakdowns: the auditable decomposition of every severity score.

use sentinel_core::{FactorContribution, FactorKind, NodeId};
use serde::{Deserialize, Serialize};

/// Severity of one node and the factors that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub node_id: NodeId,
    /// Reported severity, within `[score_floor, score_ceiling]`.
    pub score: f64,
    /// Sum of `factors` in their stored order, before clamping.
    pub raw_score: f64,
    /// Fired rules, by contribution magnitude descending, then rule name.
    pub factors: Vec<FactorContribution>,
    /// Present when clamping changed the score; its contribution is
    /// `score - raw_score`.
    pub clamp: Option<FactorContribution>,
}

impl ScoreBreakdown {
    /// Order the factors, sum them, and clamp the result. The range must
    /// come from a validated `ScoringConfig`.
    pub(crate) fn compute(
        node_id: NodeId,
        mut factors: Vec<FactorContribution>,
        floor: f64,
        ceiling: f64,
    ) -> Self {
        factors.sort_by(FactorContribution::decomposition_order);
        let raw_score = factors.iter().fold(0.0, |acc, f| acc + f.contribution);
        let score = raw_score.clamp(floor, ceiling);
        let clamp = (score != raw_score).then(|| {
            let bound = if score == ceiling { "ceiling" } else { "floor" };
            FactorContribution::new(
                FactorKind::ScoreClamp,
                score - raw_score,
                format!("raw score {raw_score:.3} clamped to {bound} {score:.3}"),
            )
        });
        Self {
            node_id,
            score,
            raw_score,
            factors,
            clamp,
        }
    }

    pub fn decomposition_sum(&self) -> f64 {
        self.factors.iter().fold(0.0, |acc, f| acc + f.contribution)
    }

    pub fn was_clamped(&self) -> bool {
        self.clamp.is_some()
    }

    pub fn factor(&self, kind: FactorKind) -> Option<&FactorContribution> {
        self.factors.iter().find(|f| f.rule == kind)
    }
}

/// Breakdowns for every node, sorted by node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    rows: Vec<ScoreBreakdown>,
}

impl ScoreTable {
    pub(crate) fn from_sorted(rows: Vec<ScoreBreakdown>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].node_id < w[1].node_id));
        Self { rows }
    }

    pub fn get(&self, id: &NodeId) -> Option<&ScoreBreakdown> {
        self.rows
            .binary_search_by(|r| r.node_id.cmp(id))
            .ok()
            .map(|i| &self.rows[i])
    }

    pub fn score_of(&self, id: &NodeId) -> Option<f64> {
        self.get(id).map(|r| r.score)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreBreakdown> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clamped_count(&self) -> usize {
        self.rows.iter().filter(|r| r.was_clamped()).count()
    }

    /// Nodes with at least one fired rule.
    pub fn scored_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.factors.is_empty()).count()
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a ScoreBreakdown;
    type IntoIter = std::slice::Iter<'a, ScoreBreakdown>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
