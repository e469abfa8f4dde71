//! Enemy AI: distance-driven state machine, damage, cooldowns and death.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{AiState, Enemy};
use super::data::SpeciesCatalog;
use crate::core::{ExperienceGained, GameConfig, SpawnEffect};
use crate::physics::{Body, ObstacleSet};
use crate::player::Player;
use crate::rendering::{paint, FrameCursor, GameAssets, PlaceholderTint};

/// Distance from `from` to `to` and the unit vector pointing there.
/// Coincident points give a zero direction.
pub fn distance_direction(from: IVec2, to: IVec2) -> (f32, Vec2) {
    let offset = (to - from).as_vec2();
    (offset.length(), offset.normalize_or_zero())
}

impl Enemy {
    /// Pick the behaviour state for a player `distance` away.
    ///
    /// An attack in progress holds the state until its animation ends.
    /// Entering the attack state restarts the animation.
    pub fn decide(&mut self, distance: f32, cursor: &mut FrameCursor) {
        if self.attacking {
            self.state = AiState::Attack;
            return;
        }

        if distance <= self.attack_radius && self.can_attack() {
            if self.state != AiState::Attack {
                cursor.reset();
            }
            self.state = AiState::Attack;
        } else if distance <= self.notice_radius {
            self.state = AiState::Move;
        } else {
            self.state = AiState::Idle;
        }
    }

    /// Start an attack if the state calls for one. Stunned enemies can't.
    pub fn act(&mut self, now: Duration) {
        if self.is_stunned() {
            return;
        }
        if self.state == AiState::Attack && self.can_attack() && !self.attacking {
            debug!("Enemy attacks");
            self.attack_cooldown.raise(now);
            self.attacking = true;
        }
    }

    /// Direction for this tick given the unit vector towards the player.
    pub fn steer(&self, toward_player: Vec2) -> Vec2 {
        if self.is_stunned() {
            -toward_player
        } else if self.state == AiState::Move {
            toward_player
        } else {
            Vec2::ZERO
        }
    }

    /// Whether the enemy moves this tick.
    pub fn is_moving(&self) -> bool {
        self.is_stunned() || self.state == AiState::Move
    }

    /// Take a hit unless invulnerable. A hit always interrupts an attack.
    ///
    /// Returns whether damage landed.
    pub fn take_damage(&mut self, amount: i32, now: Duration) -> bool {
        if !self.is_vulnerable() {
            return false;
        }
        self.health -= amount;
        self.invulnerability.raise(now);
        self.hit_stun.raise(now);
        self.attacking = false;
        true
    }

    pub fn tick_cooldowns(&mut self, now: Duration) {
        self.attack_cooldown.poll(now);
        self.invulnerability.poll(now);
        self.hit_stun.poll(now);
    }

    /// Advance the animation. A completed attack cycle ends the attack.
    pub fn animate(&mut self, cursor: &mut FrameCursor, frames: usize, speed: f32) {
        if cursor.advance(frames, speed) && self.state == AiState::Attack {
            self.attacking = false;
        }
    }
}

/// One tick of every enemy: decide, act, steer, animate, cool down, move.
#[allow(clippy::type_complexity)]
pub fn update_enemies(
    time: Res<Time>,
    config: Res<GameConfig>,
    obstacles: Res<ObstacleSet>,
    assets: Option<Res<GameAssets>>,
    player_query: Query<&Body, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(
        &mut Enemy,
        &mut Body,
        &mut FrameCursor,
        Option<&mut Sprite>,
        &PlaceholderTint,
    )>,
) {
    let Ok(player_body) = player_query.get_single() else {
        return;
    };
    let now = time.elapsed();
    let target = player_body.visual.center();

    for (mut enemy, mut body, mut cursor, sprite, tint) in enemy_query.iter_mut() {
        let (distance, toward) = distance_direction(body.visual.center(), target);

        enemy.decide(distance, &mut cursor);
        enemy.act(now);
        body.direction = enemy.steer(toward);

        let frames = assets
            .as_deref()
            .map(|assets| assets.monsters.frames(&(enemy.species, enemy.state)))
            .unwrap_or(&[]);
        enemy.animate(&mut cursor, frames.len(), config.animation_speed);
        if let Some(mut sprite) = sprite {
            paint(&mut sprite, cursor.pick(frames), tint.0, body.visual.size());
        }

        enemy.tick_cooldowns(now);

        if enemy.is_moving() {
            let speed = enemy.speed;
            body.step(speed, &obstacles.0);
        }
    }
}

/// Remove dead enemies, paying out experience and playing their death
/// effect.
pub fn reap_enemies(
    mut commands: Commands,
    species: Res<SpeciesCatalog>,
    query: Query<(Entity, &Enemy, &Body)>,
    mut rewards: EventWriter<ExperienceGained>,
    mut effects: EventWriter<SpawnEffect>,
) {
    for (entity, enemy, body) in query.iter() {
        if !enemy.is_dead() {
            continue;
        }

        rewards.send(ExperienceGained { amount: enemy.exp });
        if let Some(spec) = species.get(enemy.species) {
            info!("{} defeated (+{} exp)", spec.name, enemy.exp);
            effects.send(SpawnEffect {
                kind: spec.death_effect,
                at: body.visual.center(),
            });
        }
        commands.entity(entity).despawn_recursive();
    }
}
