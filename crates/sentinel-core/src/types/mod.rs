//! Identifiers, labels, and collection aliases shared across the workspace.

pub mod collections;
pub mod identifiers;
pub mod label;

pub use identifiers::NodeId;
pub use label::{Direction, NodeLabel};
