//! Player module - controller, status table, leveling and spawning.

mod components;
mod controller;
mod plugin;
mod systems;

pub use components::*;
pub use controller::PlayerActions;
pub use systems::{intent_from_keys, player_hitbox, spawn_player};
pub use plugin::PlayerPlugin;
