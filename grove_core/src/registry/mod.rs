//! Event Registry - the validated, read-only catalog of events.
//!
//! The registry is built once at startup and shared immutably for the rest of
//! the game. Building it checks that:
//! - **Keys** are unique
//! - **References** (prerequisites and impediments) name events in the catalog
//! - **Prerequisites** form a directed acyclic graph

mod graph;

use std::collections::HashMap;

use grove_rules::{EventDefinition, EventKey};
use tracing::info;

use crate::error::{EngineError, Result, SchemaError};

/// The validated event catalog.
///
/// Definitions keep their declaration order, which the scheduler uses to
/// break ties between events unlocked at the same time.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    /// Definitions in catalog order.
    definitions: Vec<EventDefinition>,

    /// Index: key -> position in `definitions`.
    by_key: HashMap<EventKey, usize>,
}

impl EventRegistry {
    /// Validate the definitions and build the registry.
    ///
    /// # Errors
    /// Returns the first [`SchemaError`] found: a duplicate key, a reference to
    /// an unknown event, or a prerequisite cycle.
    pub fn build(definitions: Vec<EventDefinition>) -> std::result::Result<Self, SchemaError> {
        let by_key = graph::validate(&definitions)?;

        info!(
            events = definitions.len(),
            roots = definitions.iter().filter(|d| d.prerequisites.is_empty()).count(),
            "Event registry built"
        );

        Ok(Self { definitions, by_key })
    }

    /// Look up an event by key.
    ///
    /// # Errors
    /// Returns [`EngineError::NotFound`] for an unknown key.
    pub fn lookup(&self, key: &str) -> Result<&EventDefinition> {
        self.get(key)
            .ok_or_else(|| EngineError::NotFound(EventKey::from(key)))
    }

    /// Get an event by key.
    pub fn get(&self, key: &str) -> Option<&EventDefinition> {
        self.by_key.get(key).map(|&i| &self.definitions[i])
    }

    /// Check if an event exists.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Position of an event in catalog order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// Iterate over all events in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EventDefinition> {
        self.definitions.iter()
    }

    /// Get the total number of events.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
