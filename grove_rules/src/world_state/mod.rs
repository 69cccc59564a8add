//! World state management - the named values the player fills in while playing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flag value types for world state.
///
/// Serialized untagged so a save file stores plain JSON values. Arrays and
/// objects are kept as-is in [`FlagValue::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    /// JSON has no NaN or infinity. Non-finite floats are not saved and read
    /// back as absent.
    Float(f64),
    String(String),
    Other(serde_json::Value),
}

impl FlagValue {
    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the value survives a save. Non-finite floats and JSON `null`
    /// do not.
    pub fn is_persistable(&self) -> bool {
        match self {
            FlagValue::Float(x) => x.is_finite(),
            FlagValue::Other(v) => !v.is_null(),
            _ => true,
        }
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::String(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::String(value)
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        FlagValue::Float(value)
    }
}

impl From<serde_json::Value> for FlagValue {
    fn from(value: serde_json::Value) -> Self {
        FlagValue::Other(value)
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(i) => write!(f, "{}", i),
            FlagValue::Float(x) => write!(f, "{}", x),
            FlagValue::String(s) => write!(f, "{}", s),
            FlagValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// The player's world state: free-form named values such as a chosen name.
///
/// Owned by the caller and handed to input handlers by reference. The engine
/// never reads it. A name that is absent has not been set yet; `null` values
/// in a save file are read as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<FlagValue>>",
    into = "BTreeMap<String, FlagValue>"
)]
pub struct WorldState {
    values: BTreeMap<String, FlagValue>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named value, returning the previous one.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FlagValue>,
    ) -> Option<FlagValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Get a named value.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.values.get(name)
    }

    /// Get a named value as text, if it is set and is a string.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FlagValue::as_str)
    }

    /// Check if a name has been set.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove a named value.
    pub fn unset(&mut self, name: &str) -> Option<FlagValue> {
        self.values.remove(name)
    }

    /// Iterate over all values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Get the number of values set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, Option<FlagValue>>> for WorldState {
    fn from(raw: BTreeMap<String, Option<FlagValue>>) -> Self {
        Self {
            values: raw
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v)))
                .collect(),
        }
    }
}

impl From<WorldState> for BTreeMap<String, FlagValue> {
    fn from(state: WorldState) -> Self {
        state.values
    }
}
