//! SentinelErrorCode trait for structured error reporting.

/// Trait for mapping Sentinel errors to stable error codes.
/// Every error enum implements this so orchestration layers can branch on a
/// code string instead of parsing messages.
pub trait SentinelErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_NODE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DUPLICATE_NODE: &str = "DUPLICATE_NODE";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const SELF_LOOP: &str = "SELF_LOOP";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const EMPTY_GRAPH: &str = "EMPTY_GRAPH";
pub const MISSING_FEATURES: &str = "MISSING_FEATURES";
pub const UNTIERED_SCORE: &str = "UNTIERED_SCORE";
pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
