use thiserror::Error;

/// Errors surfaced by the itinerary engine. All of them are recoverable:
/// the in-memory session is left in its last valid state and the author
/// can retry or edit.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// A required field is missing or invalid; blocks the current action only.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The upstream suggestion generator failed or returned garbage.
    #[error("suggestion generation failed: {0}")]
    Suggestion(String),

    /// A persistence collaborator rejected the materialized package.
    #[error("package persistence failed: {0}")]
    Persistence(String),
}
