//! Enemy-related components.

use bevy::prelude::*;

use super::data::SpeciesSpec;
use crate::core::{millis, EnemyTuning, TimedFlag};

/// Behaviour state; also the key of a species' animation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiState {
    /// Player out of notice range.
    #[default]
    Idle,
    /// Chasing the player.
    Move,
    /// Playing an attack.
    Attack,
}

impl AiState {
    pub const ALL: [AiState; 3] = [AiState::Idle, AiState::Move, AiState::Attack];

    pub fn name(self) -> &'static str {
        match self {
            AiState::Idle => "idle",
            AiState::Move => "move",
            AiState::Attack => "attack",
        }
    }
}

/// An enemy and its live combat state.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    /// Index into the species catalog.
    pub species: usize,
    pub health: i32,
    pub exp: u32,
    pub speed: f32,
    pub damage: i32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    pub state: AiState,
    /// Set when an attack starts; cleared when its animation completes a
    /// cycle or a hit interrupts it.
    pub attacking: bool,
    /// Raised while the attack is on cooldown.
    pub attack_cooldown: TimedFlag,
    /// Raised while invulnerable after a hit.
    pub invulnerability: TimedFlag,
    /// Raised while knocked back after a hit.
    pub hit_stun: TimedFlag,
}

impl Enemy {
    pub fn new(species: usize, spec: &SpeciesSpec, tuning: &EnemyTuning) -> Self {
        let cooldown = spec
            .attack_cooldown_ms
            .unwrap_or(tuning.default_attack_cooldown_ms);
        Self {
            species,
            health: spec.health,
            exp: spec.exp,
            speed: spec.speed,
            damage: spec.damage,
            attack_radius: spec.attack_radius,
            notice_radius: spec.notice_radius,
            state: AiState::Idle,
            attacking: false,
            attack_cooldown: TimedFlag::new(millis(cooldown)),
            invulnerability: TimedFlag::new(millis(tuning.invulnerability_ms)),
            hit_stun: TimedFlag::new(millis(tuning.hit_stun_ms)),
        }
    }

    pub fn can_attack(&self) -> bool {
        !self.attack_cooldown.is_raised()
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.invulnerability.is_raised()
    }

    pub fn is_stunned(&self) -> bool {
        self.hit_stun.is_raised()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
