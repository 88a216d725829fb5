//! # sentinel-alerts
//!
//! Alert Generator: turns score breakdowns at or above the severity
//! threshold into self-contained alert records, ordered by severity.

pub mod evidence;
pub mod generator;
pub mod typology;

pub use generator::AlertGenerator;
