//! Global events used for cross-system communication.
//!
//! The player controller never touches the scene directly: it raises
//! requests (swing, sheathe, cast) that the combat factories consume later
//! in the same tick. Effects, experience and victory travel the same way.

use bevy::prelude::*;
use serde::Deserialize;

/// Which path a hit takes through the target's damage contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageKind {
    /// Weapon swing: attacker's attack stat plus weapon damage.
    Melee,
    /// Spell particle: attacker's magic stat plus spell strength.
    Magic,
}

/// Keys for every fire-and-forget visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EffectKind {
    Flame,
    Aura,
    Heal,
    /// Hit flash on the player when an enemy connects.
    LeafAttack,
    Leaf1,
    Leaf2,
    Leaf3,
    Leaf4,
    Leaf5,
    Leaf6,
    // Death bursts
    Bamboo,
    Nova,
    Raccoon,
    Smoke,
}

impl EffectKind {
    /// Leaf variants spawned when grass is cut.
    pub const LEAVES: [EffectKind; 6] = [
        EffectKind::Leaf1,
        EffectKind::Leaf2,
        EffectKind::Leaf3,
        EffectKind::Leaf4,
        EffectKind::Leaf5,
        EffectKind::Leaf6,
    ];

    pub const ALL: [EffectKind; 14] = [
        EffectKind::Flame,
        EffectKind::Aura,
        EffectKind::Heal,
        EffectKind::LeafAttack,
        EffectKind::Leaf1,
        EffectKind::Leaf2,
        EffectKind::Leaf3,
        EffectKind::Leaf4,
        EffectKind::Leaf5,
        EffectKind::Leaf6,
        EffectKind::Bamboo,
        EffectKind::Nova,
        EffectKind::Raccoon,
        EffectKind::Smoke,
    ];

    /// Frame folder under `assets/`.
    pub fn folder(self) -> &'static str {
        match self {
            EffectKind::Flame => "graphics/particles/flame/frames",
            EffectKind::Aura => "graphics/particles/aura",
            EffectKind::Heal => "graphics/particles/heal/frames",
            EffectKind::LeafAttack => "graphics/particles/leaf_attack",
            EffectKind::Leaf1 => "graphics/particles/leaf1",
            EffectKind::Leaf2 => "graphics/particles/leaf2",
            EffectKind::Leaf3 => "graphics/particles/leaf3",
            EffectKind::Leaf4 => "graphics/particles/leaf4",
            EffectKind::Leaf5 => "graphics/particles/leaf5",
            EffectKind::Leaf6 => "graphics/particles/leaf6",
            EffectKind::Bamboo => "graphics/particles/bamboo",
            EffectKind::Nova => "graphics/particles/nova",
            EffectKind::Raccoon => "graphics/particles/raccoon",
            EffectKind::Smoke => "graphics/particles/smoke2",
        }
    }
}

/// Request a cosmetic effect centred on a point (map pixels).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnEffect {
    pub kind: EffectKind,
    pub at: IVec2,
}

/// The player started a weapon attack; the factory builds the hitbox.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponSwing {
    pub player: Entity,
}

/// The player's attack lock expired; the factory removes the hitbox.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponSheathed {
    pub player: Entity,
}

/// The player cast the selected spell.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellCast {
    pub player: Entity,
    /// Index into the spell catalog.
    pub spell: usize,
    /// Spell strength plus the caster's magic stat.
    pub strength: i32,
    pub cost: i32,
}

/// An enemy died and pays out experience.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceGained {
    pub amount: u32,
}

/// The last enemy is gone. Sent once per session.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryAchieved;
