//! Enemy plugin - registers the species catalog and enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::SpeciesCatalog;
use crate::core::SimSet;

/// Enemy plugin - handles AI, motion and death inside the fixed tick.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Species are read once and never change
            .insert_resource(SpeciesCatalog::load())
            // AI decides before it moves, within the same tick
            .add_systems(FixedUpdate, ai::update_enemies.in_set(SimSet::Enemies))
            // Death is checked after combat has applied this tick's damage
            .add_systems(FixedUpdate, ai::reap_enemies.in_set(SimSet::Cleanup));
    }
}
