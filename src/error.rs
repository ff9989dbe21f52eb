//! Error types for the diagram engine
//!
//! Every mutator raises synchronously and leaves the store untouched on failure;
//! there is no retry or fatal class. Callers (the UI layer) own user-facing messaging.

/// Error raised by store mutators and read-side resolvers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagramError {
    /// Malformed input to a mutator (empty required field, duplicate id on create)
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Operation references an id absent from the store
    #[error("Not found: {0}")]
    NotFoundError(String),
    /// Inheritance parent chain resolves back to one of its own descendants
    #[error("Inheritance cycle detected at entity '{0}'")]
    CycleError(String),
}
