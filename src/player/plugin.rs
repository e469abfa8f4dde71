//! Player plugin - input, motion, leveling and death.

use bevy::prelude::*;

use super::systems::{check_player_death, grant_experience, update_player};
use crate::core::SimSet;
use crate::enemies::reap_enemies;

/// Player plugin - drives the player inside the fixed tick.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, update_player.in_set(SimSet::Player))
            .add_systems(
                FixedUpdate,
                (grant_experience, check_player_death)
                    .chain()
                    .after(reap_enemies)
                    .in_set(SimSet::Cleanup),
            );
    }
}
