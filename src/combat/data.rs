//! Weapon and spell catalogs loaded from RON files.
//!
//! Both catalogs are loaded once while the app is built and never change
//! afterwards. Player selectors are plain indices into them.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_or_default;

pub const WEAPONS_PATH: &str = "assets/data/weapons.ron";
pub const SPELLS_PATH: &str = "assets/data/spells.ron";

/// One weapon.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponSpec {
    pub name: String,
    /// Added to the wielder's attack stat.
    pub damage: i32,
    /// Hitbox size when swung sideways; swapped for up/down swings.
    pub size: (i32, i32),
    /// HUD icon, relative to `assets/`.
    pub icon: String,
}

impl WeaponSpec {
    /// Frame for a swing towards `facing`, relative to `assets/`.
    pub fn swing_art(&self, facing: &str) -> String {
        format!("graphics/weapons/{}/{}.png", self.name, facing)
    }
}

/// All weapons, in cycling order.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponSpec>,
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self {
            weapons: vec![
                WeaponSpec {
                    name: "sword".to_string(),
                    damage: 5,
                    size: (40, 20),
                    icon: "graphics/weapons/sword/full.png".to_string(),
                },
                WeaponSpec {
                    name: "axe".to_string(),
                    damage: 10,
                    size: (44, 28),
                    icon: "graphics/weapons/axe/full.png".to_string(),
                },
            ],
        }
    }
}

impl WeaponCatalog {
    pub fn load() -> Self {
        let catalog: Self = load_or_default(WEAPONS_PATH);
        if catalog.weapons.is_empty() {
            warn!("{} lists no weapons. Using defaults.", WEAPONS_PATH);
            return Self::default();
        }
        info!("Loaded {} weapons", catalog.weapons.len());
        catalog
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Look up by index, wrapping out-of-range selectors.
    pub fn get(&self, index: usize) -> Option<&WeaponSpec> {
        if self.weapons.is_empty() {
            return None;
        }
        self.weapons.get(index % self.weapons.len())
    }
}

/// What a spell does when cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SpellKind {
    /// A line of damaging flame particles along the caster's facing.
    Flame,
    /// Restores the caster's health.
    Heal,
}

/// One spell.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellSpec {
    pub name: String,
    pub kind: SpellKind,
    pub strength: i32,
    /// Energy spent per cast.
    pub cost: i32,
    pub icon: String,
}

/// All spells, in cycling order.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<SpellSpec>,
}

impl Default for SpellCatalog {
    fn default() -> Self {
        Self {
            spells: vec![
                SpellSpec {
                    name: "flame".to_string(),
                    kind: SpellKind::Flame,
                    strength: 5,
                    cost: 20,
                    icon: "graphics/particles/flame/fire.png".to_string(),
                },
                SpellSpec {
                    name: "heal".to_string(),
                    kind: SpellKind::Heal,
                    strength: 20,
                    cost: 10,
                    icon: "graphics/particles/heal/heal.png".to_string(),
                },
            ],
        }
    }
}

impl SpellCatalog {
    pub fn load() -> Self {
        let catalog: Self = load_or_default(SPELLS_PATH);
        if catalog.spells.is_empty() {
            warn!("{} lists no spells. Using defaults.", SPELLS_PATH);
            return Self::default();
        }
        info!("Loaded {} spells", catalog.spells.len());
        catalog
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Look up by index, wrapping out-of-range selectors.
    pub fn get(&self, index: usize) -> Option<&SpellSpec> {
        if self.spells.is_empty() {
            return None;
        }
        self.spells.get(index % self.spells.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_tables() {
        let weapons = WeaponCatalog::default();
        assert_eq!(weapons.len(), 2);
        assert_eq!(weapons.weapons[0].damage, 5);
        assert_eq!(weapons.weapons[1].damage, 10);

        let spells = SpellCatalog::default();
        assert_eq!(spells.spells[0].kind, SpellKind::Flame);
        assert_eq!((spells.spells[0].strength, spells.spells[0].cost), (5, 20));
        assert_eq!(spells.spells[1].kind, SpellKind::Heal);
        assert_eq!((spells.spells[1].strength, spells.spells[1].cost), (20, 10));
    }

    #[test]
    fn lookups_wrap() {
        let weapons = WeaponCatalog::default();
        assert_eq!(weapons.get(3).map(|w| w.name.as_str()), Some("axe"));
        assert!(WeaponCatalog { weapons: Vec::new() }.get(0).is_none());
    }

    #[test]
    fn spell_catalog_parses_from_ron() {
        let catalog: SpellCatalog = ron::from_str(
            r#"(spells: [(name: "heal", kind: Heal, strength: 30, cost: 5, icon: "x.png")])"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.spells[0].strength, 30);
    }

    #[test]
    fn shipped_files_parse() {
        let weapons: WeaponCatalog = crate::core::read_ron(WEAPONS_PATH).unwrap();
        assert_eq!(weapons.weapons[1].name, "axe");
        let spells: SpellCatalog = crate::core::read_ron(SPELLS_PATH).unwrap();
        assert_eq!(spells.spells[1].kind, SpellKind::Heal);
    }
}
