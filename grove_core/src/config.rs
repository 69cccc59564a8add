//! Configuration for the Grove engine, loadable from TOML.
//!
//! ```toml
//! [scheduler]
//! capacity = 3
//! impediments = "exclude"
//!
//! [persistence]
//! save_path = "grove_save.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroveConfig {
    /// Tile scheduling settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Save file settings.
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl GroveConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `EngineError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// How impediments affect eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpedimentPolicy {
    /// A completed impediment rules the event out permanently.
    #[default]
    Exclude,
    /// Impediments are ignored; only prerequisites gate eligibility.
    Inert,
}

/// Scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum number of events offered at once.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Impediment handling.
    #[serde(default)]
    pub impediments: ImpedimentPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            impediments: ImpedimentPolicy::default(),
        }
    }
}

/// Save file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Where `JsonFileStore` keeps the save.
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
        }
    }
}

fn default_capacity() -> usize {
    3
}

fn default_save_path() -> PathBuf {
    PathBuf::from("grove_save.json")
}
