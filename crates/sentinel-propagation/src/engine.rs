//! PropagationEngine: per-seed bounded expansion and canonical merge.

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;
use sentinel_core::config::{AccumulationPolicy, PropagationConfig};
use sentinel_core::types::collections::{FxHashSet, SmallVec4};
use sentinel_core::{
    ConfigError, Direction, ExposureContribution, ExposureRecord, GraphError, NodeId,
};
use sentinel_graph::TransactionGraph;

use crate::exposure_map::ExposureMap;
use crate::frontier::{FrontierArena, Inbox};

/// What one seed deposited on one node.
type Deposit<'g> = (&'g NodeId, ExposureContribution);

/// Spreads risk mass from illicit seeds across a bounded neighborhood.
///
/// For each seed independently: hop 0 holds the seed with the injected mass.
/// At hop `h`, every frontier node emits its mass to each propagation
/// neighbor, scaled by 1 on the injection step and by the decay factor on
/// every later relay. A receiver's arrival is the mean of what its senders
/// emitted (or the strongest sender under `max_path`). Mass addressed to any
/// seed is dropped, so seeds never receive and never relay.
///
/// Per seed, a node's exposure is the sum of its hop arrivals (additive) or
/// the largest of them (`max_path`). Totals sum over seeds.
#[derive(Debug, Clone, Default)]
pub struct PropagationEngine {
    config: PropagationConfig,
}

impl PropagationEngine {
    /// Fails with `InvalidConfiguration` when the hop bound, injected mass,
    /// or decay factor is out of range.
    pub fn new(config: PropagationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    fn direction(&self) -> Direction {
        if self.config.directional {
            Direction::Outgoing
        } else {
            Direction::Both
        }
    }

    /// Propagate from every illicit node. Produces a record for every
    /// non-seed node, including unreached ones.
    pub fn propagate(&self, graph: &TransactionGraph) -> Result<ExposureMap, GraphError> {
        let start = Instant::now();
        let seeds = graph.seeds();
        if seeds.is_empty() {
            tracing::warn!("no illicit seed nodes; every exposure is zero");
        }
        let seed_set: FxHashSet<&NodeId> = seeds.iter().copied().collect();

        // Seeds are independent; the indexed collect keeps ascending seed order.
        let per_seed: Vec<Vec<Deposit<'_>>> = seeds
            .par_iter()
            .map(|&seed| self.expand_seed(graph, seed, &seed_set))
            .collect::<Result<_, _>>()?;

        let mut inbound: BTreeMap<&NodeId, SmallVec4<ExposureContribution>> = BTreeMap::new();
        for deposits in per_seed {
            for (node, contribution) in deposits {
                inbound.entry(node).or_default().push(contribution);
            }
        }

        let records: Vec<ExposureRecord> = graph
            .node_ids()
            .filter(|id| !seed_set.contains(*id))
            .map(|id| match inbound.remove(id) {
                Some(contributions) => ExposureRecord::from_contributions(id.clone(), contributions),
                None => ExposureRecord::unreached(id.clone()),
            })
            .collect();

        let map = ExposureMap::new(records, seeds.into_iter().cloned().collect());
        tracing::debug!(
            seeds = map.seeds().len(),
            exposed = map.exposed_count(),
            max_hops = self.config.max_hops,
            accumulation = %self.config.accumulation,
            duration_ms = start.elapsed().as_millis() as u64,
            "propagation complete"
        );
        Ok(map)
    }

    /// Expand one seed hop by hop and return its deposits.
    fn expand_seed<'g>(
        &self,
        graph: &'g TransactionGraph,
        seed: &'g NodeId,
        seeds: &FxHashSet<&'g NodeId>,
    ) -> Result<Vec<Deposit<'g>>, GraphError> {
        let direction = self.direction();
        let mut arena = FrontierArena::seeded(seed, self.config.seed_injection_mass);

        for hop in 1..=self.config.max_hops {
            let factor = if hop == 1 { 1.0 } else { self.config.decay_factor };
            let mut inbox = Inbox::new();
            for (&sender, &mass) in arena.current() {
                let emitted = mass * factor;
                for receiver in graph.neighbors(sender, direction)? {
                    if !seeds.contains(receiver) {
                        inbox.deliver(receiver, emitted);
                    }
                }
            }
            if inbox.is_empty() {
                break;
            }
            arena.push(inbox.settle(self.config.accumulation));
        }

        tracing::trace!(
            seed = %seed,
            hops = arena.current_hop(),
            "seed expanded"
        );
        Ok(self.deposits(seed, &arena))
    }

    /// Turn an expanded arena into per-node contributions for this seed.
    fn deposits<'g>(&self, seed: &'g NodeId, arena: &FrontierArena<'g>) -> Vec<Deposit<'g>> {
        let contribution = |hop: u32, mass: f64| ExposureContribution {
            seed: seed.clone(),
            hop,
            mass,
        };
        match self.config.accumulation {
            AccumulationPolicy::Additive => arena
                .reached()
                .flat_map(|(hop, frontier)| {
                    frontier
                        .iter()
                        .map(move |(&node, &mass)| (node, contribution(hop, mass)))
                })
                .collect(),
            AccumulationPolicy::MaxPath => {
                // Strictly greater wins, so ties keep the nearer hop.
                let mut best: BTreeMap<&'g NodeId, (u32, f64)> = BTreeMap::new();
                for (hop, frontier) in arena.reached() {
                    for (&node, &mass) in frontier {
                        let entry = best.entry(node).or_insert((hop, mass));
                        if mass > entry.1 {
                            *entry = (hop, mass);
                        }
                    }
                }
                best.into_iter()
                    .map(|(node, (hop, mass))| (node, contribution(hop, mass)))
                    .collect()
            }
        }
    }
}
