//! Within-tick ordering of the fixed-rate simulation.

use bevy::prelude::*;

/// System sets for one simulation tick, configured as a chain in
/// `FixedUpdate` so every tick runs them in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Obstacle snapshot, particle lifetimes.
    Prepare,
    /// Player input, cooldowns, status, motion, leveling.
    Player,
    /// Attack-hitbox and magic factories reacting to player requests.
    Actions,
    /// Enemy AI decision, cooldowns and motion.
    Enemies,
    /// Attack-vs-attackable and enemy-vs-player resolution.
    Combat,
    /// Deaths, experience, effects and the victory latch.
    Cleanup,
}
