//! Wildgrove - a top-down 2D action game in Bevy.
//!
//! The player roams a tile map, cuts grass, swings weapons and casts spells
//! at roaming monsters until none are left.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, config, global events, the fixed tick order
//! - **Physics**: Integer boxes and axis-separated motion
//! - **World**: Map layers and level construction
//! - **Player**: Input, status, cooldowns, leveling
//! - **Enemies**: Species catalog and the AI state machine
//! - **Combat**: Weapon and spell factories, hit resolution, victory
//! - **Rendering**: Art, particles, camera follow and depth sorting
//! - **UI**: HUD

pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct WildgrovePlugin;

impl Plugin for WildgrovePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Obstacle snapshot for motion
            .add_plugins(physics::PhysicsPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
