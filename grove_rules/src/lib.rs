//! # Grove Rules
//!
//! The "Grove Bible" crate - contains the event definitions, the player's world
//! state, and the bundled enchanted-forest catalog.
//! This crate is the single source of truth for game content and does not
//! contain any scheduling logic.

pub mod catalog;
pub mod events;
pub mod world_state;

pub use catalog::*;
pub use events::*;
pub use world_state::*;
