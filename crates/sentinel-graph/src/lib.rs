//! # sentinel-graph
//!
//! Graph Store: nodes with labels and named numeric features, directed
//! fund-flow edges, and ordered adjacency queries. Built once per dataset
//! load; every run borrows it immutably.

pub mod snapshot;
pub mod store;

pub use snapshot::{EdgeRecord, GraphSnapshot, NodeRecord};
pub use store::{GraphStats, TransactionGraph, TransactionNode};
