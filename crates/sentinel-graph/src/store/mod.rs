//! Petgraph-backed transaction graph with a canonical id index.

pub mod transaction_graph;
pub mod types;

pub use transaction_graph::TransactionGraph;
pub use types::{GraphStats, TransactionNode};
