//! Error types for the Grove engine.

use grove_rules::{EventKey, Relation};
use thiserror::Error;

/// Catalog problems found while building the registry. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two definitions share a key.
    #[error("Duplicate event key: {0}")]
    DuplicateKey(EventKey),

    /// A prerequisite or impediment names an event that is not in the catalog.
    #[error("Event '{event}' has {relation} '{missing}' which is not in the catalog")]
    DanglingReference {
        /// The event holding the reference.
        event: EventKey,
        /// The key that could not be found.
        missing: EventKey,
        /// Whether it was listed as a prerequisite or an impediment.
        relation: Relation,
    },

    /// The prerequisite graph has a cycle through these events.
    #[error("Prerequisite cycle through: {}", join_keys(.0))]
    PrerequisiteCycle(Vec<EventKey>),
}

fn join_keys(keys: &[EventKey]) -> String {
    keys.iter()
        .map(EventKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Top-level error type for all engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The catalog failed validation.
    #[error("Invalid catalog: {0}")]
    Schema(#[from] SchemaError),

    /// No event with this key exists in the registry.
    #[error("Event not found: {0}")]
    NotFound(EventKey),

    /// The event has already been completed.
    #[error("Event already completed: {0}")]
    AlreadyCompleted(EventKey),

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;
