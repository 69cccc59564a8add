//! Storage adapters for a single save slot.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{PersistenceAdapter, SaveFile};
use crate::config::PersistenceConfig;
use crate::error::Result;

/// Keeps the encoded save in memory, like a browser storage key.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding raw bytes, valid or not.
    pub fn with_blob(blob: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// The raw stored bytes.
    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }

    /// Drop whatever is stored.
    pub fn clear(&mut self) {
        self.blob = None;
    }
}

impl PersistenceAdapter for MemoryStore {
    fn save(&mut self, save: &SaveFile) -> Result<()> {
        self.blob = Some(save.to_blob()?);
        debug!(entries = save.event_log.len(), "Save stored in memory");
        Ok(())
    }

    fn load(&self) -> SaveFile {
        match &self.blob {
            Some(bytes) => SaveFile::from_blob(bytes),
            None => SaveFile::default(),
        }
    }
}

/// Keeps the save as a JSON file on disk.
///
/// Writes go to a sibling temp file first and are then renamed over the save,
/// so an interrupted write leaves the previous save intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the configured save path.
    pub fn from_config(config: &PersistenceConfig) -> Self {
        Self::new(config.save_path.clone())
    }

    /// Path of the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PersistenceAdapter for JsonFileStore {
    fn save(&mut self, save: &SaveFile) -> Result<()> {
        let blob = save.to_blob()?;
        let temp = self.temp_path();

        std::fs::write(&temp, &blob)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            if let Err(cleanup) = std::fs::remove_file(&temp) {
                debug!(path = %temp.display(), error = %cleanup, "Temp save not removed");
            }
            return Err(e.into());
        }

        info!(
            path = %self.path.display(),
            entries = save.event_log.len(),
            bytes = blob.len(),
            "Game saved"
        );
        Ok(())
    }

    fn load(&self) -> SaveFile {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                let save = SaveFile::from_blob(&bytes);
                info!(
                    path = %self.path.display(),
                    entries = save.event_log.len(),
                    "Game loaded"
                );
                save
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No save file, starting fresh");
                SaveFile::default()
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Save file unreadable, starting fresh"
                );
                SaveFile::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionEntry;
    use grove_rules::WorldState;

    fn sample() -> SaveFile {
        let mut world = WorldState::new();
        world.set("wolfName", "Fenris");
        SaveFile {
            event_log: vec![
                CompletionEntry::new("look-around", "Forest."),
                CompletionEntry::new("explore-grove", "Grove."),
            ],
            world,
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().is_empty());

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());

        store.clear();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_memory_store_corrupt() {
        let store = MemoryStore::with_blob(b"\x00\x01garbage".to_vec());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));

        store.save(&sample()).unwrap();

        assert_eq!(store.load(), sample());
        assert!(!dir.path().join("save.json.tmp").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));

        store.save(&sample()).unwrap();
        store.save(&SaveFile::default()).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_failed_rename_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the save path makes the rename fail.
        let path = dir.path().join("save.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let mut store = JsonFileStore::new(&path);

        assert!(store.save(&sample()).is_err());
        assert!(!dir.path().join("save.json.tmp").exists());
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("never-saved.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{\"eventLog\": [").unwrap();

        assert!(JsonFileStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_file_store_from_config() {
        let config = PersistenceConfig::default();
        let store = JsonFileStore::from_config(&config);
        assert_eq!(store.path(), Path::new("grove_save.json"));
    }
}
