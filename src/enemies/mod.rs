//! Enemies module - species, AI state machine, spawning and death.

mod ai;
mod components;
pub mod data;
mod plugin;
mod spawning;

pub use ai::{distance_direction, reap_enemies};
pub use components::*;
pub use data::{SpeciesCatalog, SpeciesSpec};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
