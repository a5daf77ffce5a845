//! Engine error model.

use thiserror::Error;

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Keep this focused on deterministic failures of the read path. Mapping each
/// variant to an external status/message belongs to the transport layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A data-integrity problem in seeded configuration (e.g. a cycle in the
    /// management tree). Distinct from `NotFound` so operators can tell
    /// integrity problems apart from ordinary empty results.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The primary subject of a request did not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// The principal lacks the permission or hierarchy scope for the view.
    #[error("authorization denied: {0}")]
    Authorization(String),

    /// A trend request carried a period the engine cannot parse.
    #[error("invalid calendar input: {0}")]
    CalendarInput(String),
}

impl EngineError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    pub fn calendar_input(msg: impl Into<String>) -> Self {
        Self::CalendarInput(msg.into())
    }
}
