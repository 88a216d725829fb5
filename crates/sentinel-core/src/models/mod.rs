//! Shared output models: score factors, exposure records, tiers, and alerts.

pub mod alert;
pub mod exposure;
pub mod factor;
pub mod tier;

pub use alert::{Alert, AlertEvidence, Typology};
pub use exposure::{ExposureContribution, ExposureRecord};
pub use factor::{FactorContribution, FactorKind};
pub use tier::{SeverityTier, TierTable};
