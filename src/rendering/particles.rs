//! Fire-and-forget effects.
//!
//! A particle plays its frame sequence once and removes itself. Spell
//! particles carry a `Body` (they double as attack hitboxes); cosmetic ones
//! an `EffectBox`.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::animation::{paint, FrameCursor};
use super::assets::GameAssets;
use super::components::{EffectBox, PlaceholderTint, SpawnSequence};
use crate::core::{EffectKind, GameConfig, LevelEntity, SpawnEffect};
use crate::physics::{Body, Bounds};

/// A playing effect.
#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub kind: EffectKind,
}

/// Placeholder colour per effect.
pub fn effect_tint(kind: EffectKind) -> Color {
    match kind {
        EffectKind::Flame => Color::srgba(1.0, 0.45, 0.1, 0.8),
        EffectKind::Aura | EffectKind::Heal => Color::srgba(0.5, 0.9, 1.0, 0.6),
        EffectKind::LeafAttack => Color::srgba(0.9, 0.2, 0.2, 0.6),
        EffectKind::Leaf1
        | EffectKind::Leaf2
        | EffectKind::Leaf3
        | EffectKind::Leaf4
        | EffectKind::Leaf5
        | EffectKind::Leaf6 => Color::srgba(0.3, 0.7, 0.2, 0.7),
        EffectKind::Bamboo | EffectKind::Nova | EffectKind::Raccoon | EffectKind::Smoke => {
            Color::srgba(0.8, 0.8, 0.8, 0.6)
        }
    }
}

/// Spawn a particle of `kind`. The caller adds its box.
pub fn spawn_particle<'a>(
    commands: &'a mut Commands,
    sequence: &mut SpawnSequence,
    kind: EffectKind,
) -> EntityCommands<'a> {
    commands.spawn((
        Name::new(format!("{:?}", kind)),
        Particle { kind },
        FrameCursor::default(),
        PlaceholderTint(effect_tint(kind)),
        sequence.next(),
        LevelEntity,
        Sprite {
            anchor: Anchor::BottomCenter,
            ..default()
        },
    ))
}

/// Turn effect requests into particles.
pub fn spawn_effects(
    mut commands: Commands,
    mut sequence: ResMut<SpawnSequence>,
    config: Res<GameConfig>,
    mut requests: EventReader<SpawnEffect>,
) {
    let (w, h) = config.effects.effect_size;
    for request in requests.read() {
        let bounds = Bounds::from_center(request.at, IVec2::new(w, h));
        spawn_particle(&mut commands, &mut sequence, request.kind).insert(EffectBox(bounds));
    }
}

/// Advance every particle; remove those whose sequence completed.
pub fn animate_particles(
    mut commands: Commands,
    config: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
    mut particles: Query<(
        Entity,
        &Particle,
        &mut FrameCursor,
        &mut Sprite,
        &PlaceholderTint,
        Option<&EffectBox>,
        Option<&Body>,
    )>,
) {
    for (entity, particle, mut cursor, mut sprite, tint, effect_box, body) in particles.iter_mut() {
        let frames = assets
            .as_deref()
            .map(|assets| assets.effects.frames(&particle.kind))
            .unwrap_or(&[]);

        if cursor.advance(frames.len(), config.animation_speed) {
            commands.entity(entity).despawn_recursive();
            continue;
        }

        let size = effect_box
            .map(|b| b.0.size())
            .or_else(|| body.map(|b| b.visual.size()))
            .unwrap_or(IVec2::ZERO);
        paint(&mut sprite, cursor.pick(frames), tint.0, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn effect_request_becomes_particle() {
        let mut world = World::new();
        world.init_resource::<SpawnSequence>();
        world.insert_resource(GameConfig::default());
        world.init_resource::<Events<SpawnEffect>>();
        world.send_event(SpawnEffect {
            kind: EffectKind::Smoke,
            at: IVec2::new(100, 100),
        });

        world.run_system_once(spawn_effects).unwrap();

        let mut query = world.query::<(&Particle, &EffectBox)>();
        let spawned: Vec<_> = query.iter(&world).map(|(p, b)| (p.kind, b.0)).collect();
        assert_eq!(spawned, vec![(EffectKind::Smoke, Bounds::new(68, 68, 64, 64))]);
    }

    #[test]
    fn particle_without_frames_expires() {
        let mut world = World::new();
        world.init_resource::<SpawnSequence>();
        world.insert_resource(GameConfig::default());
        let particle = world
            .spawn((
                Particle {
                    kind: EffectKind::Heal,
                },
                FrameCursor::default(),
                Sprite::default(),
                PlaceholderTint(Color::WHITE),
                EffectBox(Bounds::new(0, 0, 64, 64)),
            ))
            .id();

        // 0.15 frames per tick through one placeholder frame
        let mut ticks = 0;
        while world.get::<Particle>(particle).is_some() && ticks < 100 {
            world.run_system_once(animate_particles).unwrap();
            ticks += 1;
        }
        assert_eq!(ticks, 7);
    }
}
