//! RunContext: configuration, per-run buffers, and stage ordering.

use std::time::Instant;

use rayon::ThreadPool;
use sentinel_alerts::AlertGenerator;
use sentinel_core::config::SentinelConfig;
use sentinel_core::tracing::metrics;
use sentinel_core::{Alert, PipelineError};
use sentinel_features::{FeatureExtractor, FeatureTable};
use sentinel_graph::TransactionGraph;
use sentinel_propagation::{ExposureMap, PropagationEngine};
use sentinel_scoring::{ScoreTable, ScoringEngine};
use tracing::info;

use crate::state::RunState;
use crate::summary::RunSummary;

/// Shared state of one scoring run.
///
/// The graph is borrowed immutably for the lifetime of the context, so it
/// cannot change while a run is in progress. Each stage writes its buffer
/// exactly once; calling a stage out of order fails with
/// `PipelineError::InvalidTransition` and leaves the context untouched.
#[derive(Debug)]
pub struct RunContext<'g> {
    graph: &'g TransactionGraph,
    config: SentinelConfig,
    pool: Option<ThreadPool>,
    state: RunState,
    features: Option<FeatureTable>,
    exposure: Option<ExposureMap>,
    scores: Option<ScoreTable>,
    alerts: Option<Vec<Alert>>,
    summary: RunSummary,
}

impl<'g> RunContext<'g> {
    /// Validate the configuration and prepare an idle run.
    pub fn new(graph: &'g TransactionGraph, config: SentinelConfig) -> Result<Self, PipelineError> {
        SentinelConfig::validate(&config)?;
        let pool = match config.runtime.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("sentinel-worker-{i}"))
                    .build()
                    .map_err(|e| PipelineError::ThreadPool {
                        message: e.to_string(),
                    })?,
            ),
            None => None,
        };
        Ok(Self {
            graph,
            config,
            pool,
            state: RunState::Idle,
            features: None,
            exposure: None,
            scores: None,
            alerts: None,
            summary: RunSummary::default(),
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &SentinelConfig {
        &self.config
    }

    pub fn graph(&self) -> &'g TransactionGraph {
        self.graph
    }

    pub fn features(&self) -> Option<&FeatureTable> {
        self.features.as_ref()
    }

    pub fn exposure(&self) -> Option<&ExposureMap> {
        self.exposure.as_ref()
    }

    pub fn scores(&self) -> Option<&ScoreTable> {
        self.scores.as_ref()
    }

    pub fn alerts(&self) -> Option<&[Alert]> {
        self.alerts.as_deref()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Idle -> FeaturesComputed.
    pub fn compute_features(&mut self) -> Result<&FeatureTable, PipelineError> {
        self.check_transition(RunState::FeaturesComputed)?;
        let start = Instant::now();
        let graph = self.graph;
        let extractor = FeatureExtractor::new(self.config.features.clone());
        let table = self.install(|| extractor.extract(graph))?;
        let duration_ms = elapsed_ms(start);

        info!(
            stage = metrics::STAGE_FEATURES,
            nodes = table.len(),
            rapid_fan_out = table.rapid_fan_out_count(),
            duration_ms,
            "stage complete"
        );
        self.summary.record_stage(metrics::STAGE_FEATURES, duration_ms);
        self.summary.record_count(metrics::NODES, table.len());
        self.summary.record_count(metrics::EDGES, graph.edge_count());
        self.summary
            .record_count(metrics::RAPID_FAN_OUT, table.rapid_fan_out_count());

        self.state = RunState::FeaturesComputed;
        Ok(&*self.features.insert(table))
    }

    /// FeaturesComputed -> ExposureComputed.
    pub fn compute_exposure(&mut self) -> Result<&ExposureMap, PipelineError> {
        self.check_transition(RunState::ExposureComputed)?;
        let start = Instant::now();
        let graph = self.graph;
        let engine = PropagationEngine::new(self.config.propagation.clone())?;
        let map = self.install(|| engine.propagate(graph))?;
        let duration_ms = elapsed_ms(start);

        info!(
            stage = metrics::STAGE_PROPAGATION,
            seeds = map.seeds().len(),
            exposed = map.exposed_count(),
            duration_ms,
            "stage complete"
        );
        self.summary.record_stage(metrics::STAGE_PROPAGATION, duration_ms);
        self.summary.record_count(metrics::SEEDS, map.seeds().len());
        self.summary.record_count(metrics::EXPOSED, map.exposed_count());

        self.state = RunState::ExposureComputed;
        Ok(&*self.exposure.insert(map))
    }

    /// ExposureComputed -> ScoresComputed.
    pub fn compute_scores(&mut self) -> Result<&ScoreTable, PipelineError> {
        self.check_transition(RunState::ScoresComputed)?;
        let (Some(features), Some(exposure)) = (self.features.as_ref(), self.exposure.as_ref())
        else {
            return Err(self.invalid(RunState::ScoresComputed));
        };
        let start = Instant::now();
        let engine = ScoringEngine::new(self.config.scoring.clone())?;
        let table = self.install(|| engine.score(features, exposure));
        let duration_ms = elapsed_ms(start);

        info!(
            stage = metrics::STAGE_SCORING,
            scored = table.scored_count(),
            clamped = table.clamped_count(),
            duration_ms,
            "stage complete"
        );
        self.summary.record_stage(metrics::STAGE_SCORING, duration_ms);
        self.summary.record_count(metrics::SCORED, table.scored_count());
        self.summary.record_count(metrics::CLAMPED, table.clamped_count());

        self.state = RunState::ScoresComputed;
        Ok(&*self.scores.insert(table))
    }

    /// ScoresComputed -> AlertsGenerated. Fails with `EmptyGraph` on a graph
    /// with zero nodes.
    pub fn generate_alerts(&mut self) -> Result<&[Alert], PipelineError> {
        self.check_transition(RunState::AlertsGenerated)?;
        let (Some(features), Some(exposure), Some(scores)) = (
            self.features.as_ref(),
            self.exposure.as_ref(),
            self.scores.as_ref(),
        ) else {
            return Err(self.invalid(RunState::AlertsGenerated));
        };
        let start = Instant::now();
        let generator = AlertGenerator::new(self.config.alerts.clone())?;
        let alerts = generator.generate(self.graph, features, exposure, scores)?;
        let duration_ms = elapsed_ms(start);

        info!(
            stage = metrics::STAGE_ALERTS,
            alerts = alerts.len(),
            threshold = self.config.alerts.severity_threshold,
            duration_ms,
            "stage complete"
        );
        self.summary.record_stage(metrics::STAGE_ALERTS, duration_ms);
        self.summary.record_count(metrics::ALERTS, alerts.len());

        self.state = RunState::AlertsGenerated;
        Ok(self.alerts.insert(alerts).as_slice())
    }

    /// Run every remaining stage in order.
    pub fn run_to_completion(&mut self) -> Result<&[Alert], PipelineError> {
        if self.state == RunState::Idle {
            self.compute_features()?;
        }
        if self.state == RunState::FeaturesComputed {
            self.compute_exposure()?;
        }
        if self.state == RunState::ExposureComputed {
            self.compute_scores()?;
        }
        if self.state == RunState::ScoresComputed {
            self.generate_alerts()?;
        }
        self.alerts
            .as_deref()
            .ok_or_else(|| self.invalid(RunState::AlertsGenerated))
    }

    /// Discard every computed buffer and return to `Idle`.
    pub fn reset(&mut self) {
        self.features = None;
        self.exposure = None;
        self.scores = None;
        self.alerts = None;
        self.summary = RunSummary::default();
        self.state = RunState::Idle;
    }

    /// Consume a finished run, returning its alerts and summary.
    pub fn into_output(self) -> Result<(Vec<Alert>, RunSummary), PipelineError> {
        match self.alerts {
            Some(alerts) if self.state == RunState::AlertsGenerated => Ok((alerts, self.summary)),
            _ => Err(PipelineError::InvalidTransition {
                from: self.state.as_str(),
                to: RunState::AlertsGenerated.as_str(),
            }),
        }
    }

    fn check_transition(&self, to: RunState) -> Result<(), PipelineError> {
        if self.state.successor() == Some(to) {
            Ok(())
        } else {
            Err(self.invalid(to))
        }
    }

    fn invalid(&self, to: RunState) -> PipelineError {
        PipelineError::InvalidTransition {
            from: self.state.as_str(),
            to: to.as_str(),
        }
    }

    /// Run `op` on the dedicated pool when one is configured.
    fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
