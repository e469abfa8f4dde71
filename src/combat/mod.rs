//! Combat module - weapon and spell catalogs, attack hitboxes, damage.

mod components;
pub mod data;
mod magic;
mod plugin;
mod systems;
mod weapon;

pub use components::*;
pub use data::{SpellCatalog, SpellKind, SpellSpec, WeaponCatalog, WeaponSpec};
pub use magic::{cast_spells, flame_points};
pub use plugin::CombatPlugin;
pub use systems::{announce_victory, leaf_burst, resolve_enemy_contact, resolve_player_attacks};
pub use weapon::{sheathe_weapons, swing_weapons, weapon_bounds};
