//! # Grove Core
//!
//! The engine behind the forest story. This crate takes the catalog from
//! `grove_rules`, validates it into an [`EventRegistry`], records what the
//! player has done in a [`CompletionLog`], and decides which events to offer
//! next with the [`UnlockScheduler`].
//!
//! ## Core Components
//!
//! - **registry**: Validated, read-only event catalog and its prerequisite graph
//! - **completion**: Ordered log of resolved events
//! - **scheduler**: Capacity-bounded selection of eligible events
//! - **progression**: The resolve/save/load flow driven by the view layer
//! - **persistence**: Save file format and storage adapters
//!
//! ## Design Philosophy
//!
//! - **Pure Scheduling**: Eligibility is a function of the registry and the log, nothing else
//! - **Caller-Owned State**: The world state and the visible tiles belong to the view layer
//! - **Fail-Soft Loading**: A missing or corrupt save starts a fresh game instead of failing

pub mod completion;
pub mod config;
pub mod error;
pub mod persistence;
pub mod progression;
pub mod registry;
pub mod scheduler;

pub use completion::*;
pub use config::GroveConfig;
pub use error::{EngineError, Result, SchemaError};
pub use persistence::*;
pub use progression::*;
pub use registry::*;
pub use scheduler::*;
