//! Persistence - the save file format and the storage boundary.
//!
//! A save is a single JSON object holding the completion log under
//! `eventLog`, with world-state values as sibling top-level fields:
//!
//! ```json
//! {
//!   "eventLog": [{ "eventId": "mirror", "message": "You are a wizard." }],
//!   "wizardDescription": "tall, grey-bearded",
//!   "dryadName": null
//! }
//! ```
//!
//! Loading never fails. Missing or unreadable saves start a fresh game.
//!
//! World values named `eventLog`, and values JSON cannot hold (non-finite
//! floats, `null`), are left out of the save with a warning.

mod store;

pub use store::*;

use grove_rules::WorldState;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::completion::{CompletionEntry, CompletionLog};
use crate::error::{EngineError, Result};

/// Top-level field holding the completion log.
pub const EVENT_LOG_FIELD: &str = "eventLog";

/// Everything written to storage for one playthrough.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaveFile {
    #[serde(rename = "eventLog", default)]
    pub event_log: Vec<CompletionEntry>,

    /// World-state values, stored beside the log.
    #[serde(flatten)]
    pub world: WorldState,
}

impl SaveFile {
    /// Snapshot a log and world state.
    pub fn new(log: &CompletionLog, world: &WorldState) -> Self {
        Self {
            event_log: log.entries().to_vec(),
            world: world.clone(),
        }
    }

    /// Encode as JSON bytes.
    ///
    /// # Errors
    /// Returns [`EngineError::Serialization`] if encoding fails.
    pub fn to_blob(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// Decode JSON bytes, reporting malformed input.
    ///
    /// # Errors
    /// Returns [`EngineError::Serialization`] if the bytes are not a valid save.
    pub fn try_from_blob(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// Decode JSON bytes, falling back to an empty save on malformed input.
    pub fn from_blob(bytes: &[u8]) -> Self {
        Self::try_from_blob(bytes).unwrap_or_else(|e| {
            warn!(error = %e, bytes = bytes.len(), "Corrupt save discarded, starting fresh");
            Self::default()
        })
    }

    /// Check if the save holds no progress at all.
    pub fn is_empty(&self) -> bool {
        self.event_log.is_empty() && self.world.is_empty()
    }
}

impl Serialize for SaveFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(EVENT_LOG_FIELD, &self.event_log)?;
        for (name, value) in self.world.iter() {
            if name == EVENT_LOG_FIELD {
                warn!(name, "World value shadows the event log, not saved");
            } else if !value.is_persistable() {
                warn!(name, value = %value, "World value has no JSON form, not saved");
            } else {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}

/// Storage for a single save slot.
pub trait PersistenceAdapter {
    /// Write the save, replacing whatever was stored.
    ///
    /// # Errors
    /// Returns an error if the save cannot be encoded or written.
    fn save(&mut self, save: &SaveFile) -> Result<()>;

    /// Read the save. Missing or corrupt storage yields an empty save.
    fn load(&self) -> SaveFile;
}
