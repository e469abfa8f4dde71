//! Core game module - states, events, timing and configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod clock;
mod config;
mod error;
mod events;
mod plugin;
mod rng;
mod schedule;
mod states;

pub use clock::*;
pub use config::*;
pub use error::DataLoadError;
pub use events::*;
pub use plugin::CorePlugin;
pub use rng::GameRng;
pub use schedule::SimSet;
pub use states::*;
