//! Rendering plugin - camera, art loading, particles and depth sorting.

use bevy::prelude::*;

use super::assets::load_game_assets;
use super::components::{SpawnSequence, WorldCamera};
use super::depth::sync_world_sprites;
use super::particles::{animate_particles, spawn_effects};
use crate::core::{GameState, SimSet};
use crate::enemies::reap_enemies;

/// Rendering plugin - draws the simulation after each fixed tick.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnSequence>()
            .add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameState::Loading), load_game_assets)
            // Particles age before anything collides with them
            .add_systems(FixedUpdate, animate_particles.in_set(SimSet::Prepare))
            // Death effects are requested while reaping
            .add_systems(
                FixedUpdate,
                spawn_effects.after(reap_enemies).in_set(SimSet::Cleanup),
            )
            .add_systems(
                Update,
                sync_world_sprites.run_if(in_state(GameState::InGame)),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("World Camera"), Camera2d, WorldCamera));
}
