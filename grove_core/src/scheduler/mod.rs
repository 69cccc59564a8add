//! Unlock Scheduler - decides which events to offer the player next.
//!
//! The selection works as follows:
//! 1. **Room**: `capacity` minus the number of visible events; nothing to do at zero
//! 2. **Walk**: Visit events in catalog order
//! 3. **Filter**: Keep events that are not completed, not visible, have every
//!    prerequisite completed, and (unless impediments are inert) no completed impediment
//! 4. **Fill**: Take filtered events in order until the room is used up
//!
//! Scheduling is a pure function of its inputs: calling it again with the same
//! completed and visible sets gives the same answer.

use std::collections::HashSet;

use grove_rules::{EventDefinition, EventKey};
use tracing::debug;

use crate::config::{ImpedimentPolicy, SchedulerConfig};
use crate::registry::EventRegistry;

/// Capacity-bounded selection of eligible events.
#[derive(Debug, Clone, Default)]
pub struct UnlockScheduler {
    config: SchedulerConfig,
}

impl UnlockScheduler {
    /// Create a scheduler with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Create a scheduler with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SchedulerConfig::default())
    }

    /// Create a scheduler with the given capacity and default impediment handling.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(SchedulerConfig {
            capacity,
            ..SchedulerConfig::default()
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Maximum number of events offered at once.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Check whether a single event may be offered.
    pub fn is_candidate(
        &self,
        event: &EventDefinition,
        completed: &HashSet<EventKey>,
        visible: &HashSet<EventKey>,
    ) -> bool {
        if completed.contains(&event.key) || visible.contains(&event.key) {
            return false;
        }

        if !event.prerequisites.iter().all(|p| completed.contains(p)) {
            return false;
        }

        match self.config.impediments {
            ImpedimentPolicy::Exclude => !event.impediments.iter().any(|i| completed.contains(i)),
            ImpedimentPolicy::Inert => true,
        }
    }

    /// All events that may be offered, ignoring capacity, in catalog order.
    pub fn candidates<'a>(
        &'a self,
        registry: &'a EventRegistry,
        completed: &'a HashSet<EventKey>,
        visible: &'a HashSet<EventKey>,
    ) -> impl Iterator<Item = &'a EventDefinition> + 'a {
        registry
            .iter()
            .filter(move |event| self.is_candidate(event, completed, visible))
    }

    /// Events to add to the visible set, in the order they should appear.
    ///
    /// Never returns more than `capacity - visible.len()` keys.
    pub fn compute_eligible(
        &self,
        registry: &EventRegistry,
        completed: &HashSet<EventKey>,
        visible: &HashSet<EventKey>,
    ) -> Vec<EventKey> {
        let available = self.config.capacity.saturating_sub(visible.len());
        if available == 0 {
            return Vec::new();
        }

        let selected: Vec<EventKey> = self
            .candidates(registry, completed, visible)
            .take(available)
            .map(|event| event.key.clone())
            .collect();

        debug!(
            completed = completed.len(),
            visible = visible.len(),
            available,
            selected = ?selected,
            "Scheduled eligible events"
        );

        selected
    }
}

/// Compute eligible events with an explicit capacity and impediments enforced.
pub fn compute_eligible(
    registry: &EventRegistry,
    completed: &HashSet<EventKey>,
    visible: &HashSet<EventKey>,
    capacity: usize,
) -> Vec<EventKey> {
    UnlockScheduler::with_capacity(capacity).compute_eligible(registry, completed, visible)
}
