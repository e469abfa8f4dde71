//! Enemy species loaded from a RON file.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{load_or_default, EffectKind};

pub const SPECIES_PATH: &str = "assets/data/monsters.ron";

/// Stat template for one kind of enemy.
#[derive(Deserialize, Clone, Debug)]
pub struct SpeciesSpec {
    /// Also the art folder under `graphics/monsters/`.
    pub name: String,
    /// Entity-layer map code that spawns this species.
    pub code: i32,
    pub health: i32,
    /// Experience paid to the player on death.
    pub exp: u32,
    pub speed: f32,
    /// Damage dealt to the player on contact.
    pub damage: i32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    /// Falls back to the shared enemy default when absent.
    #[serde(default)]
    pub attack_cooldown_ms: Option<u64>,
    pub death_effect: EffectKind,
}

/// Resource holding every species.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct SpeciesCatalog {
    pub species: Vec<SpeciesSpec>,
    /// Species spawned for enemy codes no entry claims.
    pub fallback: String,
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        // name, code, health (also exp), speed, damage, attack radius,
        // notice radius, cooldown ms, death effect
        let table: [(&str, i32, i32, f32, i32, f32, f32, u64, EffectKind); 4] = [
            ("bamboo", 390, 50, 2.0, 10, 30.0, 150.0, 1200, EffectKind::Bamboo),
            ("spirit", 391, 80, 3.0, 12, 40.0, 200.0, 900, EffectKind::Nova),
            ("raccoon", 392, 70, 3.0, 14, 35.0, 160.0, 1000, EffectKind::Raccoon),
            ("squid", 393, 90, 2.0, 18, 45.0, 180.0, 1400, EffectKind::Smoke),
        ];

        let species = table
            .into_iter()
            .map(
                |(name, code, health, speed, damage, attack_radius, notice_radius, cooldown, death_effect)| {
                    SpeciesSpec {
                        name: name.to_string(),
                        code,
                        health,
                        exp: health as u32,
                        speed,
                        damage,
                        attack_radius,
                        notice_radius,
                        attack_cooldown_ms: Some(cooldown),
                        death_effect,
                    }
                },
            )
            .collect();

        Self {
            species,
            fallback: "squid".to_string(),
        }
    }
}

impl SpeciesCatalog {
    pub fn load() -> Self {
        let catalog: Self = load_or_default(SPECIES_PATH);
        if catalog.species.is_empty() {
            warn!("{} lists no species. Using defaults.", SPECIES_PATH);
            return Self::default();
        }
        if catalog.index_of(&catalog.fallback).is_none() {
            warn!(
                "Fallback species '{}' is not in {}. Unknown codes will spawn '{}'.",
                catalog.fallback, SPECIES_PATH, catalog.species[0].name
            );
        }
        info!("Loaded {} enemy species", catalog.species.len());
        catalog
    }

    pub fn get(&self, index: usize) -> Option<&SpeciesSpec> {
        self.species.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }

    /// Species for an entity-layer code. Codes no species claims map to the
    /// fallback species, or the first one if the fallback is unknown.
    pub fn for_code(&self, code: i32) -> Option<usize> {
        if self.species.is_empty() {
            return None;
        }
        self.species
            .iter()
            .position(|s| s.code == code)
            .or_else(|| self.index_of(&self.fallback))
            .or(Some(0))
    }
}
