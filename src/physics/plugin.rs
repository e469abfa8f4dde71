//! Physics plugin - keeps the per-tick obstacle snapshot current.

use bevy::prelude::*;

use super::motion::{collect_obstacles, ObstacleSet};
use crate::core::SimSet;

/// Physics plugin - registers the obstacle snapshot.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleSet>()
            .add_systems(FixedUpdate, collect_obstacles.in_set(SimSet::Prepare));
    }
}
