//! End-to-end pipeline entry points.

use std::path::Path;

use sentinel_core::config::{CliOverrides, SentinelConfig};
use sentinel_core::{Alert, PipelineError};
use sentinel_graph::TransactionGraph;
use tracing::info;

use crate::context::RunContext;
use crate::summary::RunSummary;

/// Run the full pipeline over `graph` and return the ordered alerts.
///
/// The run context lives only for the duration of this call.
pub fn run(graph: &TransactionGraph, config: &SentinelConfig) -> Result<Vec<Alert>, PipelineError> {
    run_with_summary(graph, config).map(|(alerts, _)| alerts)
}

/// Like [`run`], also returning stage timings and headline counts.
pub fn run_with_summary(
    graph: &TransactionGraph,
    config: &SentinelConfig,
) -> Result<(Vec<Alert>, RunSummary), PipelineError> {
    let stats = graph.stats();
    info!(
        nodes = stats.nodes,
        edges = stats.edges,
        seeds = stats.illicit,
        isolated = stats.isolated,
        max_hops = config.propagation.max_hops,
        accumulation = %config.propagation.accumulation,
        "scoring run started"
    );

    let mut ctx = RunContext::new(graph, config.clone())?;
    ctx.run_to_completion()?;
    let (alerts, summary) = ctx.into_output()?;

    info!(
        alerts = alerts.len(),
        duration_ms = summary.total_duration_ms(),
        "scoring run complete"
    );
    Ok((alerts, summary))
}

/// Resolve configuration from `root` (project file, environment, overrides)
/// and run the pipeline.
pub fn run_in(
    root: &Path,
    graph: &TransactionGraph,
    overrides: Option<&CliOverrides>,
) -> Result<Vec<Alert>, PipelineError> {
    let config = SentinelConfig::load(root, overrides)?;
    run(graph, &config)
}
