//! Event definitions - the story beats offered to the player.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

use crate::world_state::WorldState;

/// Unique key for an event, e.g. `"name-wolf"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventKey(String);

impl EventKey {
    /// Create a key from any string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EventKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EventKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for EventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handler run with the player's text when an input event is resolved.
///
/// Cheap to clone; the closure is shared.
#[derive(Clone)]
pub struct InputHandler(Arc<dyn Fn(&str, &mut WorldState) + Send + Sync>);

impl InputHandler {
    /// Wrap a closure as an input handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &mut WorldState) + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Handler that stores the player's text under `name` in the world state.
    pub fn store_as(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(move |input, world| {
            world.set(name.clone(), input);
        })
    }

    /// Handler that does nothing.
    pub fn noop() -> Self {
        Self::new(|_, _| {})
    }

    /// Invoke the handler.
    pub fn call(&self, input: &str, world: &mut WorldState) {
        (self.0)(input, world)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InputHandler(..)")
    }
}

/// Relation between two events in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Must be completed before the event is eligible.
    Prerequisite,
    /// Once completed, the event is never eligible.
    Impediment,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Prerequisite => f.write_str("prerequisite"),
            Relation::Impediment => f.write_str("impediment"),
        }
    }
}

/// A single event the player can resolve.
#[derive(Debug, Clone)]
pub struct EventDefinition {
    pub key: EventKey,
    pub title: String,

    /// Text logged once the event is resolved. May contain placeholders such
    /// as `{wolfName}`, filled in by the view layer.
    pub message: String,

    /// Keys that must all be completed first. Kept in declaration order
    /// without duplicates.
    pub prerequisites: Vec<EventKey>,

    /// Keys whose completion rules this event out for good.
    pub impediments: Vec<EventKey>,

    pub requires_input: bool,
    pub input_prompt: String,
    pub on_input: InputHandler,
}

impl EventDefinition {
    /// Create a new event with no relations and no input step.
    pub fn new(
        key: impl Into<EventKey>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            message: message.into(),
            prerequisites: Vec::new(),
            impediments: Vec::new(),
            requires_input: false,
            input_prompt: String::new(),
            on_input: InputHandler::noop(),
        }
    }

    /// Add a prerequisite.
    pub fn with_prerequisite(mut self, key: impl Into<EventKey>) -> Self {
        push_unique(&mut self.prerequisites, key.into());
        self
    }

    /// Add multiple prerequisites.
    pub fn with_prerequisites<K: Into<EventKey>>(
        mut self,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        for key in keys {
            push_unique(&mut self.prerequisites, key.into());
        }
        self
    }

    /// Add an impediment.
    pub fn with_impediment(mut self, key: impl Into<EventKey>) -> Self {
        push_unique(&mut self.impediments, key.into());
        self
    }

    /// Require player input, handled by `handler`.
    pub fn with_input(mut self, prompt: impl Into<String>, handler: InputHandler) -> Self {
        self.requires_input = true;
        self.input_prompt = prompt.into();
        self.on_input = handler;
        self
    }

    /// Iterate over every key this event refers to, with the relation.
    pub fn references(&self) -> impl Iterator<Item = (Relation, &EventKey)> {
        self.prerequisites
            .iter()
            .map(|k| (Relation::Prerequisite, k))
            .chain(self.impediments.iter().map(|k| (Relation::Impediment, k)))
    }
}

fn push_unique(keys: &mut Vec<EventKey>, key: EventKey) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = EventDefinition::new("build-workshop", "Construct a Workshop", "A workshop...")
            .with_prerequisites(["build-basic-hut", "gather-materials"])
            .with_impediment("burn-forest");

        assert_eq!(event.key.as_str(), "build-workshop");
        assert_eq!(event.prerequisites.len(), 2);
        assert_eq!(event.impediments, vec![EventKey::from("burn-forest")]);
        assert!(!event.requires_input);
    }

    #[test]
    fn test_duplicate_relations_collapse() {
        let event = EventDefinition::new("a", "A", "")
            .with_prerequisite("b")
            .with_prerequisite("b")
            .with_impediment("c")
            .with_impediment("c");

        assert_eq!(event.prerequisites.len(), 1);
        assert_eq!(event.impediments.len(), 1);
        assert_eq!(event.references().count(), 2);
    }

    #[test]
    fn test_store_as_handler() {
        let event = EventDefinition::new("name-wolf", "Name the Wolf", "")
            .with_input("Name the wolf:", InputHandler::store_as("wolfName"));
        let mut world = WorldState::new();

        event.on_input.call("Fenris", &mut world);

        assert!(event.requires_input);
        assert_eq!(event.input_prompt, "Name the wolf:");
        assert_eq!(world.get_text("wolfName"), Some("Fenris"));
    }

    #[test]
    fn test_key_display_and_borrow() {
        use std::collections::HashSet;

        let key = EventKey::from("mirror");
        assert_eq!(key.to_string(), "mirror");

        let set: HashSet<EventKey> = [key].into_iter().collect();
        assert!(set.contains("mirror"));
    }
}
