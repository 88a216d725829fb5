//! Severity tiers: named buckets over the severity score.

use serde::{Deserialize, Serialize};

/// A named severity bucket starting at `lower_bound` (inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeverityTier {
    pub lower_bound: f64,
    pub name: String,
}

impl SeverityTier {
    pub fn new(lower_bound: f64, name: impl Into<String>) -> Self {
        Self {
            lower_bound,
            name: name.into(),
        }
    }
}

/// Ordered tier lookup. Tiers must be sorted by strictly ascending lower bound;
/// configuration validation guarantees this before a table is built.
#[derive(Debug, Clone)]
pub struct TierTable<'a> {
    tiers: &'a [SeverityTier],
}

impl<'a> TierTable<'a> {
    pub fn new(tiers: &'a [SeverityTier]) -> Self {
        Self { tiers }
    }

    /// The highest tier whose lower bound is at or below `score`.
    pub fn assign(&self, score: f64) -> Option<&'a SeverityTier> {
        self.tiers.iter().rev().find(|t| score >= t.lower_bound)
    }

    /// Position of a tier by name (0 = lowest).
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.tiers.iter().position(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> Vec<SeverityTier> {
        vec![
            SeverityTier::new(0.0, "low"),
            SeverityTier::new(25.0, "medium"),
            SeverityTier::new(50.0, "high"),
            SeverityTier::new(75.0, "critical"),
        ]
    }

    #[test]
    fn test_assign_uses_inclusive_lower_bounds() {
        let tiers = tiers();
        let table = TierTable::new(&tiers);
        assert_eq!(table.assign(0.0).unwrap().name, "low");
        assert_eq!(table.assign(24.999).unwrap().name, "low");
        assert_eq!(table.assign(25.0).unwrap().name, "medium");
        assert_eq!(table.assign(74.0).unwrap().name, "high");
        assert_eq!(table.assign(100.0).unwrap().name, "critical");
        assert!(table.assign(-1.0).is_none());
    }

    #[test]
    fn test_rank_of() {
        let tiers = tiers();
        let table = TierTable::new(&tiers);
        assert_eq!(table.rank_of("low"), Some(0));
        assert_eq!(table.rank_of("critical"), Some(3));
        assert_eq!(table.rank_of("severe"), None);
        assert_eq!(table.len(), 4);
    }
}
