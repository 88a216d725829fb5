//! # sentinel-engine
//!
//! Orchestrates a scoring run over an immutable graph:
//! features -> propagation -> scoring -> alerts.
//!
//! [`RunContext`] owns the configuration and the per-run buffers and
//! enforces stage order; [`run`] drives a full pass and returns the alerts.

pub mod context;
pub mod pipeline;
pub mod state;
pub mod summary;

pub use context::RunContext;
pub use pipeline::{run, run_in, run_with_summary};
pub use state::RunState;
pub use summary::{RunSummary, StageTiming};

pub use sentinel_core::config::SentinelConfig;
pub use sentinel_core::{Alert, PipelineError};
pub use sentinel_graph::{GraphSnapshot, TransactionGraph};
