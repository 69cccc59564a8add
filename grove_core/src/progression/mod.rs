//! Progression - the resolve, save, and load flow driven by the view layer.
//!
//! The view layer asks which events to show, renders them, and reports back
//! when the player resolves one:
//!
//! 1. [`Progression::present`] hands newly eligible events to a [`ViewPort`]
//! 2. The player resolves a tile; the view calls [`Progression::resolve`]
//! 3. The input handler (if any) runs against the caller's [`WorldState`]
//! 4. The completion is logged and the view asks again
//!
//! Loading replaces the log and re-runs the scheduler with nothing visible.

use std::collections::HashSet;

use grove_rules::{EventDefinition, EventKey, WorldState};
use tracing::{debug, info, warn};

use crate::completion::{CompletionEntry, CompletionLog};
use crate::config::GroveConfig;
use crate::error::{EngineError, Result};
use crate::persistence::{PersistenceAdapter, SaveFile};
use crate::registry::EventRegistry;
use crate::scheduler::UnlockScheduler;

/// Presentation seam: whatever draws tiles for the player.
pub trait ViewPort {
    /// Show newly eligible events, in order.
    fn render(&mut self, eligible: &[&EventDefinition]);
}

/// A playthrough over a fixed registry.
#[derive(Debug, Clone)]
pub struct Progression<'r> {
    registry: &'r EventRegistry,
    log: CompletionLog,
    scheduler: UnlockScheduler,
}

impl<'r> Progression<'r> {
    /// Start a fresh playthrough.
    pub fn new(registry: &'r EventRegistry, scheduler: UnlockScheduler) -> Self {
        Self {
            registry,
            log: CompletionLog::new(),
            scheduler,
        }
    }

    /// Start a fresh playthrough with the configured scheduler.
    pub fn from_config(registry: &'r EventRegistry, config: &GroveConfig) -> Self {
        Self::new(registry, UnlockScheduler::new(config.scheduler.clone()))
    }

    pub fn registry(&self) -> &'r EventRegistry {
        self.registry
    }

    pub fn log(&self) -> &CompletionLog {
        &self.log
    }

    pub fn scheduler(&self) -> &UnlockScheduler {
        &self.scheduler
    }

    /// Events to add to the visible set.
    pub fn eligible(&self, visible: &HashSet<EventKey>) -> Vec<EventKey> {
        self.scheduler
            .compute_eligible(self.registry, self.log.completed_set(), visible)
    }

    /// Render newly eligible events and return their keys so the caller can
    /// add them to its visible set.
    pub fn present<V: ViewPort + ?Sized>(
        &self,
        visible: &HashSet<EventKey>,
        view: &mut V,
    ) -> Vec<EventKey> {
        let keys = self.eligible(visible);
        let events: Vec<&EventDefinition> = keys
            .iter()
            .filter_map(|key| self.registry.get(key.as_str()))
            .collect();
        view.render(&events);
        keys
    }

    /// Check if nothing is left to offer, even with every tile cleared.
    pub fn is_exhausted(&self) -> bool {
        let nothing_visible = HashSet::new();
        let exhausted = self
            .scheduler
            .candidates(self.registry, self.log.completed_set(), &nothing_visible)
            .next()
            .is_none();
        exhausted
    }

    /// Resolve an event, logging its catalog message.
    ///
    /// # Errors
    /// See [`Progression::resolve_with_message`].
    pub fn resolve(
        &mut self,
        key: &str,
        input: Option<&str>,
        world: &mut WorldState,
    ) -> Result<&CompletionEntry> {
        let registry = self.registry;
        let message = registry.lookup(key)?.message.clone();
        self.resolve_with_message(key, input, world, message)
    }

    /// Resolve an event, logging a message the caller already rendered.
    ///
    /// The input handler runs once, with trimmed text, before the completion is
    /// logged. Nothing runs and nothing changes if the call fails.
    ///
    /// # Errors
    /// Returns [`EngineError::NotFound`] for an unknown key, or
    /// [`EngineError::AlreadyCompleted`] if the event was resolved before.
    pub fn resolve_with_message(
        &mut self,
        key: &str,
        input: Option<&str>,
        world: &mut WorldState,
        message: impl Into<String>,
    ) -> Result<&CompletionEntry> {
        let registry = self.registry;
        let event = registry.lookup(key)?;

        if self.log.is_completed(key) {
            debug!(event = key, "Ignoring resolve of completed event");
            return Err(EngineError::AlreadyCompleted(event.key.clone()));
        }

        if event.requires_input {
            event.on_input.call(input.unwrap_or_default().trim(), world);
        }

        self.log.record_completion(event.key.clone(), message)
    }

    /// Write the log and world state through the adapter.
    ///
    /// # Errors
    /// Returns any error raised by the adapter.
    pub fn save<A: PersistenceAdapter + ?Sized>(
        &self,
        world: &WorldState,
        adapter: &mut A,
    ) -> Result<()> {
        adapter.save(&SaveFile::new(&self.log, world))
    }

    /// Replace the log from the adapter and reschedule from scratch.
    ///
    /// Returns the loaded world state and the events to show.
    pub fn load<A: PersistenceAdapter + ?Sized>(
        &mut self,
        adapter: &A,
    ) -> (WorldState, Vec<EventKey>) {
        let save = adapter.load();

        let unknown = save
            .event_log
            .iter()
            .filter(|entry| !self.registry.contains(entry.event_id.as_str()))
            .count();
        if unknown > 0 {
            warn!(unknown, "Save mentions events missing from the catalog");
        }

        self.log.restore(save.event_log);
        let eligible = self.eligible(&HashSet::new());

        info!(
            completed = self.log.len(),
            eligible = eligible.len(),
            "Progression restored"
        );

        (save.world, eligible)
    }
}
