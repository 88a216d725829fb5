//! # sentinel-scoring
//!
//! Scoring Engine: a closed set of rules reads a node's features and
//! exposure record, each fired rule contributes a weighted, named factor,
//! and the sum is clamped to the reported range. Every score decomposes
//! exactly into its factors plus an explicit clamp adjustment.

pub mod breakdown;
pub mod engine;
pub mod rules;

pub use breakdown::{ScoreBreakdown, ScoreTable};
pub use engine::ScoringEngine;
pub use rules::{Rule, RuleInput};
