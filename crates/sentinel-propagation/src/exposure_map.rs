//! Propagation output: one exposure record per non-seed node.

use sentinel_core::{ExposureRecord, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureMap {
    /// Ascending by node id. Seeds have no record.
    records: Vec<ExposureRecord>,
    /// Ascending.
    seeds: Vec<NodeId>,
}

impl ExposureMap {
    pub(crate) fn new(records: Vec<ExposureRecord>, seeds: Vec<NodeId>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].node_id < w[1].node_id));
        Self { records, seeds }
    }

    pub fn get(&self, id: &NodeId) -> Option<&ExposureRecord> {
        self.records
            .binary_search_by(|r| r.node_id.cmp(id))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Total exposure of a node. Seeds and unknown ids have zero.
    pub fn exposure_of(&self, id: &NodeId) -> f64 {
        self.get(id).map_or(0.0, |r| r.total)
    }

    pub fn is_seed(&self, id: &NodeId) -> bool {
        self.seeds.binary_search(id).is_ok()
    }

    pub fn seeds(&self) -> &[NodeId] {
        &self.seeds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExposureRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with non-zero exposure.
    pub fn exposed(&self) -> impl Iterator<Item = &ExposureRecord> + '_ {
        self.records.iter().filter(|r| r.is_exposed())
    }

    pub fn exposed_count(&self) -> usize {
        self.exposed().count()
    }

    /// Sum of all node totals, in ascending id order.
    pub fn total_mass(&self) -> f64 {
        self.records.iter().fold(0.0, |acc, r| acc + r.total)
    }
}

impl<'a> IntoIterator for &'a ExposureMap {
    type Item = &'a ExposureRecord;
    type IntoIter = std::slice::Iter<'a, ExposureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
