//! # sentinel-propagation
//!
//! Propagation Engine: every illicit seed injects a fixed mass that spreads
//! outward hop by hop, split across senders and decayed per relay, up to a
//! hard hop bound. Seeds are expanded in parallel and merged in ascending id
//! order so the result never depends on scheduling.

pub mod engine;
pub mod exposure_map;
pub mod frontier;

pub use engine::PropagationEngine;
pub use exposure_map::ExposureMap;
pub use frontier::{FrontierArena, Inbox};
