//! World plugin - level building and teardown.

use bevy::prelude::*;

use crate::combat::Victory;
use crate::core::{GameConfig, GameRng, GameState, LevelEntity};
use crate::enemies::SpeciesCatalog;
use crate::rendering::{GameAssets, SpawnSequence};

use super::builder::{build_level, plan_level};
use super::data::MapLayers;

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_level)
            .add_systems(OnExit(GameState::InGame), cleanup_level);
    }
}

/// Build a fresh level from the configured map layers.
pub fn setup_level(
    mut commands: Commands,
    mut sequence: ResMut<SpawnSequence>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
    species: Res<SpeciesCatalog>,
    assets: Option<Res<GameAssets>>,
) {
    let layers = MapLayers::load(&config.map);
    let plan = plan_level(&layers, &config.map, &species);

    let summary = build_level(
        &mut commands,
        &mut sequence,
        &config,
        &species,
        assets.as_deref(),
        &mut rng.0,
        &plan,
    );

    info!(
        "Built level: {} obstacles ({} grass), {} enemies",
        summary.obstacles, summary.grass, summary.enemies
    );
    if summary.player.is_none() {
        warn!("Map has no player start");
    }
}

/// Tear the session down when leaving InGame.
fn cleanup_level(
    mut commands: Commands,
    mut sequence: ResMut<SpawnSequence>,
    mut victory: ResMut<Victory>,
    level_query: Query<Entity, With<LevelEntity>>,
) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    sequence.reset();
    *victory = Victory::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn cleanup_removes_session() {
        let mut world = World::new();
        world.init_resource::<SpawnSequence>();
        world.insert_resource(Victory { announced: true });
        world.resource_mut::<SpawnSequence>().next();
        let level = world.spawn(LevelEntity).id();
        let kept = world.spawn(Name::new("Camera")).id();

        world.run_system_once(cleanup_level).unwrap();

        assert!(world.get::<LevelEntity>(level).is_none());
        assert!(world.get::<Name>(kept).is_some());
        assert!(!world.resource::<Victory>().announced);
        assert_eq!(world.resource_mut::<SpawnSequence>().next().order, 0);
    }
}
