//! Combat resolution: hitboxes against attackables, enemies against the
//! player, and the win condition.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::Rng;

use super::components::{AttackHitbox, Attackable, DamageKind, Destructible, Victory};
use super::data::{SpellCatalog, WeaponCatalog};
use super::magic::cast_spells;
use super::weapon::{sheathe_weapons, swing_weapons};
use crate::core::{
    EffectKind, ExperienceGained, GameConfig, GameRng, SimSet, SpawnEffect, VictoryAchieved,
};
use crate::enemies::{reap_enemies, Enemy};
use crate::physics::{Body, Bounds};
use crate::player::Player;
use crate::rendering::Drawable;

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Resources
        .insert_resource(WeaponCatalog::load())
        .insert_resource(SpellCatalog::load())
        .init_resource::<Victory>()

        // Factories consume this tick's requests from the player
        .add_systems(
            FixedUpdate,
            (sheathe_weapons, swing_weapons, cast_spells)
                .chain()
                .in_set(SimSet::Actions),
        )

        // Resolution runs after every body has moved
        .add_systems(
            FixedUpdate,
            (resolve_player_attacks, resolve_enemy_contact)
                .chain()
                .in_set(SimSet::Combat),
        )

        // Victory needs this tick's dead enemies gone
        .add_systems(
            FixedUpdate,
            announce_victory.after(reap_enemies).in_set(SimSet::Cleanup),
        );
}

/// Leaf effects for one cut grass tile drawn in `visual`.
pub fn leaf_burst(visual: Bounds, config: &GameConfig, rng: &mut impl Rng) -> Vec<SpawnEffect> {
    let (low, high) = config.effects.leaf_count;
    let count = rng.gen_range(low..=high.max(low));
    let at = visual.center() - IVec2::new(0, config.effects.leaf_lift);
    (0..count)
        .map(|_| {
            let kind = EffectKind::LEAVES[rng.gen_range(0..EffectKind::LEAVES.len())];
            SpawnEffect { kind, at }
        })
        .collect()
}

/// Every live attack hitbox against every attackable.
///
/// Grass is cut outright. Enemies go through their own damage contract,
/// which ignores hits while they are invulnerable.
#[allow(clippy::too_many_arguments)]
pub fn resolve_player_attacks(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    weapons: Res<WeaponCatalog>,
    spells: Res<SpellCatalog>,
    mut rng: ResMut<GameRng>,
    hitboxes: Query<(&AttackHitbox, &Body, &Drawable)>,
    attackables: Query<(Entity, &Body, &Drawable, Has<Destructible>), With<Attackable>>,
    mut enemies: Query<&mut Enemy>,
    players: Query<&Player>,
    mut effects: EventWriter<SpawnEffect>,
) {
    let now = time.elapsed();

    let mut attacks: Vec<_> = hitboxes.iter().collect();
    attacks.sort_by_key(|(_, _, drawable)| drawable.order);
    let mut targets: Vec<_> = attackables.iter().collect();
    targets.sort_by_key(|(_, _, drawable, _)| drawable.order);

    let mut cut = HashSet::new();
    for (hitbox, hit_body, _) in attacks {
        let Ok(player) = players.get(hitbox.owner) else {
            continue;
        };
        let damage = match hitbox.kind {
            DamageKind::Melee => player.weapon_damage(&weapons),
            DamageKind::Magic => player.magic_damage(&spells),
        };

        for &(target, body, _, destructible) in &targets {
            if !hit_body.hitbox.collides(&body.hitbox) {
                continue;
            }

            if destructible {
                if cut.insert(target) {
                    effects.send_batch(leaf_burst(body.visual, &config, &mut rng.0));
                    commands.entity(target).despawn_recursive();
                }
            } else if let Ok(mut enemy) = enemies.get_mut(target) {
                if enemy.take_damage(damage, now) {
                    debug!("Enemy hit for {} ({:?})", damage, hitbox.kind);
                }
            }
        }
    }
}

/// Enemies touching the player hurt it.
///
/// Vulnerability is checked once for the whole pass, so every enemy in
/// contact this tick lands its hit. Enemies killed this tick still collide
/// until they are reaped.
pub fn resolve_enemy_contact(
    time: Res<Time>,
    mut players: Query<(&mut Player, &Body)>,
    enemies: Query<(&Enemy, &Body, &Drawable)>,
    mut effects: EventWriter<SpawnEffect>,
) {
    let Ok((mut player, player_body)) = players.get_single_mut() else {
        return;
    };
    if !player.is_vulnerable() {
        return;
    }
    let now = time.elapsed();

    let mut touching: Vec<_> = enemies
        .iter()
        .filter(|(_, body, _)| body.hitbox.collides(&player_body.hitbox))
        .collect();
    touching.sort_by_key(|(_, _, drawable)| drawable.order);

    for (enemy, _, _) in touching {
        player.suffer(enemy.damage, now);
        effects.send(SpawnEffect {
            kind: EffectKind::LeafAttack,
            at: player_body.visual.center(),
        });
    }
}

/// Announce victory the tick the last enemy is killed.
pub fn announce_victory(
    mut victory: ResMut<Victory>,
    mut kills: EventReader<ExperienceGained>,
    enemies: Query<(), With<Enemy>>,
    mut signal: EventWriter<VictoryAchieved>,
) {
    let killed = kills.read().count() > 0;
    if victory.announced || !killed || !enemies.is_empty() {
        return;
    }
    victory.announced = true;
    info!("Every enemy is defeated");
    signal.send(VictoryAchieved);
}
