//! Combat-related components.

use bevy::prelude::*;

pub use crate::core::DamageKind;

/// Marker for entities that attack hitboxes can hit (enemies and grass).
#[derive(Component, Default)]
pub struct Attackable;

/// Marker for decoration that is removed outright when hit.
#[derive(Component, Default)]
pub struct Destructible;

/// A weapon swing or damaging spell particle.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackHitbox {
    pub owner: Entity,
    pub kind: DamageKind,
}

/// Latch so victory is announced once per session.
#[derive(Resource, Default, Debug)]
pub struct Victory {
    pub announced: bool,
}
