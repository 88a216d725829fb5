//! Hop-indexed frontier arena.
//!
//! `frontiers[h]` maps every node reached at hop `h` to the mass it holds.
//! Keys are borrowed ids in a `BTreeMap`, so each hop is expanded in
//! ascending id order.

use std::collections::BTreeMap;

use sentinel_core::config::AccumulationPolicy;
use sentinel_core::NodeId;

/// Frontier of a single hop.
pub type Frontier<'g> = BTreeMap<&'g NodeId, f64>;

/// All frontiers of one seed's expansion, indexed by hop.
#[derive(Debug, Clone)]
pub struct FrontierArena<'g> {
    frontiers: Vec<Frontier<'g>>,
}

impl<'g> FrontierArena<'g> {
    /// Arena holding only hop 0: the seed with its injected mass.
    pub fn seeded(seed: &'g NodeId, mass: f64) -> Self {
        let mut hop0 = Frontier::new();
        hop0.insert(seed, mass);
        Self { frontiers: vec![hop0] }
    }

    /// The most recently completed hop.
    pub fn current_hop(&self) -> u32 {
        (self.frontiers.len() - 1) as u32
    }

    pub fn current(&self) -> &Frontier<'g> {
        &self.frontiers[self.frontiers.len() - 1]
    }

    pub fn hop(&self, hop: u32) -> Option<&Frontier<'g>> {
        self.frontiers.get(hop as usize)
    }

    pub fn push(&mut self, frontier: Frontier<'g>) {
        self.frontiers.push(frontier);
    }

    /// Hops after the seed itself: `(hop, frontier)` for hop >= 1.
    pub fn reached(&self) -> impl Iterator<Item = (u32, &Frontier<'g>)> + '_ {
        self.frontiers
            .iter()
            .enumerate()
            .skip(1)
            .map(|(h, f)| (h as u32, f))
    }
}

/// Collects the masses emitted toward each receiver during one hop.
#[derive(Debug, Default)]
pub struct Inbox<'g> {
    slots: BTreeMap<&'g NodeId, Slot>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Slot {
    sum: f64,
    max: f64,
    senders: u32,
}

impl<'g> Inbox<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mass` emitted by one sender toward `receiver`. Senders are
    /// delivered in ascending id order, which fixes the summation order.
    pub fn deliver(&mut self, receiver: &'g NodeId, mass: f64) {
        let slot = self.slots.entry(receiver).or_default();
        slot.sum += mass;
        slot.max = slot.max.max(mass);
        slot.senders += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolve arrivals: the mean over senders (additive) or the strongest
    /// single sender (max path).
    pub fn settle(self, policy: AccumulationPolicy) -> Frontier<'g> {
        self.slots
            .into_iter()
            .map(|(node, slot)| {
                let arrival = match policy {
                    AccumulationPolicy::Additive => slot.sum / f64::from(slot.senders),
                    AccumulationPolicy::MaxPath => slot.max,
                };
                (node, arrival)
            })
            .collect()
    }
}
