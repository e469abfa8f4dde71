//! Spell casting: heal and flame.

use bevy::prelude::*;
use rand::Rng;

use super::components::{AttackHitbox, DamageKind};
use super::data::{SpellCatalog, SpellKind};
use crate::core::{EffectKind, GameConfig, GameRng, SpawnEffect, SpellCast};
use crate::physics::{Body, Bounds};
use crate::player::{Facing, Player};
use crate::rendering::{spawn_particle, SpawnSequence};

/// Centres of the flame particles thrown from `origin` towards `facing`:
/// one per tile for `count` tiles, each nudged by `jitter` on both axes.
pub fn flame_points(
    origin: IVec2,
    facing: Facing,
    tile: i32,
    count: i32,
    mut jitter: impl FnMut() -> i32,
) -> Vec<IVec2> {
    (1..=count)
        .map(|i| {
            let along = facing.step() * tile * i;
            let x = origin.x + along.x + jitter();
            let y = origin.y + along.y + jitter();
            IVec2::new(x, y)
        })
        .collect()
}

/// Resolve cast requests. Casting without enough energy does nothing.
#[allow(clippy::too_many_arguments)]
pub fn cast_spells(
    mut commands: Commands,
    mut sequence: ResMut<SpawnSequence>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
    spells: Res<SpellCatalog>,
    mut casts: EventReader<SpellCast>,
    mut players: Query<(&mut Player, &Body)>,
    mut effects: EventWriter<SpawnEffect>,
) {
    for cast in casts.read() {
        let Ok((mut player, body)) = players.get_mut(cast.player) else {
            continue;
        };
        let Some(spell) = spells.get(cast.spell) else {
            continue;
        };
        if !player.try_spend_energy(cast.cost) {
            debug!("Not enough energy for {}", spell.name);
            continue;
        }

        let center = body.visual.center();
        match spell.kind {
            SpellKind::Heal => {
                player.restore_health(cast.strength);
                effects.send(SpawnEffect {
                    kind: EffectKind::Aura,
                    at: center,
                });
                effects.send(SpawnEffect {
                    kind: EffectKind::Heal,
                    at: center - IVec2::new(0, config.effects.heal_lift),
                });
            }
            SpellKind::Flame => {
                let tile = config.tile_size;
                let spread = tile / 3;
                let points = flame_points(
                    center,
                    player.status.facing,
                    tile,
                    config.effects.flame_length,
                    || rng.0.gen_range(-spread..=spread),
                );
                let size = IVec2::new(config.effects.effect_size.0, config.effects.effect_size.1);
                for point in points {
                    let bounds = Bounds::from_center(point, size);
                    spawn_particle(&mut commands, &mut sequence, EffectKind::Flame).insert((
                        Body::solid(bounds),
                        AttackHitbox {
                            owner: cast.player,
                            kind: DamageKind::Magic,
                        },
                    ));
                }
            }
        }
    }
}
