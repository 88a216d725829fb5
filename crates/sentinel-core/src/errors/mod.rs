//! Error handling for Sentinel.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod alert_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod pipeline_error;

pub use alert_error::AlertError;
pub use config_error::ConfigError;
pub use error_code::SentinelErrorCode;
pub use graph_error::GraphError;
pub use pipeline_error::PipelineError;
