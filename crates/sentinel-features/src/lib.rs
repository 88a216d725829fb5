//! # sentinel-features
//!
//! Feature Extractor: fan-in, fan-out, direct and strict two-hop exposure
//! to illicit neighbors, and the structural flags the rules read. Pure
//! functions of the graph, computed in parallel per node.

pub mod extractor;
pub mod neighborhood;
pub mod types;

pub use extractor::FeatureExtractor;
pub use types::{FeatureTable, NodeFeatures};
