//! Completion Log - the ordered record of resolved events.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use grove_rules::EventKey;
use tracing::debug;

use crate::error::{EngineError, Result};

/// One resolved event and the message shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub event_id: EventKey,
    pub message: String,
}

impl CompletionEntry {
    /// Create a new entry.
    pub fn new(event_id: impl Into<EventKey>, message: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            message: message.into(),
        }
    }
}

/// Completed events in the order the player resolved them.
///
/// `record_completion` never lets a key in twice. `restore` takes a loaded
/// sequence as-is, including keys the registry does not know.
#[derive(Debug, Clone, Default)]
pub struct CompletionLog {
    entries: Vec<CompletionEntry>,

    /// Index: keys present in `entries`.
    completed: HashSet<EventKey>,
}

impl CompletionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an event has been completed.
    pub fn is_completed(&self, key: &str) -> bool {
        self.completed.contains(key)
    }

    /// All completed keys.
    pub fn completed_set(&self) -> &HashSet<EventKey> {
        &self.completed
    }

    /// Append a completion.
    ///
    /// # Errors
    /// Returns [`EngineError::AlreadyCompleted`] if the key is already in the
    /// log; the log is left untouched.
    pub fn record_completion(
        &mut self,
        key: impl Into<EventKey>,
        message: impl Into<String>,
    ) -> Result<&CompletionEntry> {
        let key = key.into();
        if self.completed.contains(&key) {
            debug!(event = %key, "Rejected repeat completion");
            return Err(EngineError::AlreadyCompleted(key));
        }

        debug!(event = %key, position = self.entries.len(), "Event completed");
        self.completed.insert(key.clone());
        self.entries.push(CompletionEntry::new(key, message));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the whole log, e.g. after loading a save.
    pub fn restore(&mut self, entries: Vec<CompletionEntry>) {
        self.completed = entries.iter().map(|e| e.event_id.clone()).collect();
        self.entries = entries;
        debug!(entries = self.entries.len(), "Completion log restored");
    }

    /// Entries in completion order.
    pub fn entries(&self) -> &[CompletionEntry] {
        &self.entries
    }

    /// The most recent completion.
    pub fn last(&self) -> Option<&CompletionEntry> {
        self.entries.last()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been completed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CompletionEntry>> for CompletionLog {
    fn from(entries: Vec<CompletionEntry>) -> Self {
        let mut log = Self::new();
        log.restore(entries);
        log
    }
}
