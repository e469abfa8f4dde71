//! Enemy spawning from entity-layer codes.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::components::Enemy;
use super::data::SpeciesCatalog;
use crate::combat::Attackable;
use crate::core::{GameConfig, LevelEntity};
use crate::physics::{Body, Bounds};
use crate::rendering::{FrameCursor, PlaceholderTint, SpawnSequence};

/// Spawn an enemy of species `species` with its sprite's top-left at
/// `origin`. Returns `None` for an unknown species index.
pub fn spawn_enemy(
    commands: &mut Commands,
    sequence: &mut SpawnSequence,
    config: &GameConfig,
    catalog: &SpeciesCatalog,
    species: usize,
    origin: IVec2,
) -> Option<Entity> {
    let spec = catalog.get(species)?;
    let tuning = &config.enemy;
    let visual = Bounds::new(origin.x, origin.y, tuning.sprite_size.0, tuning.sprite_size.1);
    let hitbox = visual.inflate(0, -tuning.hitbox_trim);

    let entity = commands
        .spawn((
            Name::new(spec.name.clone()),
            Enemy::new(species, spec, tuning),
            Body::new(hitbox, visual),
            FrameCursor::default(),
            Attackable,
            PlaceholderTint(Color::srgb_u8(120, 20, 20)),
            sequence.next(),
            LevelEntity,
            Sprite {
                anchor: Anchor::BottomCenter,
                ..default()
            },
        ))
        .id();

    debug!("Spawned {} at {:?}", spec.name, origin);
    Some(entity)
}
