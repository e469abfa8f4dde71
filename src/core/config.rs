//! Game configuration loaded from an external RON file.
//!
//! Allows tweaking timings, stats and map sources without recompilation.
//! Every field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::clock::millis;
use super::error::DataLoadError;

/// Path of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/config.ron";

/// The five player stats, also used for per-level growth.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub health: i32,
    pub energy: i32,
    pub attack: i32,
    pub magic: i32,
    pub speed: f32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            health: 100,
            energy: 60,
            attack: 10,
            magic: 4,
            speed: 6.0,
        }
    }
}

/// Player timings and progression.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub stats: StatBlock,
    pub level_up: StatBlock,
    pub initial_exp_needed: u32,
    pub attack_lock_ms: u64,
    pub invulnerability_ms: u64,
    pub switch_delay_ms: u64,
    /// Visual box size in pixels.
    pub sprite_size: (i32, i32),
    /// Collision box size as a fraction of the visual box.
    pub hitbox_scale: (f32, f32),
    pub starting_weapon: usize,
    pub starting_spell: usize,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            stats: StatBlock::default(),
            level_up: StatBlock {
                health: 10,
                energy: 5,
                attack: 2,
                magic: 1,
                speed: 0.0,
            },
            initial_exp_needed: 100,
            attack_lock_ms: 400,
            invulnerability_ms: 500,
            switch_delay_ms: 200,
            sprite_size: (64, 64),
            hitbox_scale: (0.5, 0.35),
            starting_weapon: 1,
            starting_spell: 0,
        }
    }
}

impl PlayerTuning {
    pub fn attack_lock(&self) -> Duration {
        millis(self.attack_lock_ms)
    }

    pub fn invulnerability(&self) -> Duration {
        millis(self.invulnerability_ms)
    }

    pub fn switch_delay(&self) -> Duration {
        millis(self.switch_delay_ms)
    }
}

/// Enemy timings shared by every species.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub invulnerability_ms: u64,
    pub hit_stun_ms: u64,
    /// Used when a species does not name its own cooldown.
    pub default_attack_cooldown_ms: u64,
    pub sprite_size: (i32, i32),
    /// Pixels trimmed off the visual box height to get the collision box.
    pub hitbox_trim: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            invulnerability_ms: 300,
            hit_stun_ms: 300,
            default_attack_cooldown_ms: 1000,
            sprite_size: (64, 64),
            hitbox_trim: 10,
        }
    }
}

/// Placement and counts of cosmetic and magic effects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectTuning {
    pub effect_size: (i32, i32),
    /// Inclusive range of leaves spawned when grass is cut.
    pub leaf_count: (u32, u32),
    /// Leaves spawn this far above the cut tile's centre.
    pub leaf_lift: i32,
    /// The heal sparkle spawns this far above the player's centre.
    pub heal_lift: i32,
    /// Number of flame particles in one flame cast.
    pub flame_length: i32,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            effect_size: (64, 64),
            leaf_count: (3, 6),
            leaf_lift: 75,
            heal_lift: 60,
            flame_length: 5,
        }
    }
}

/// Map layer sources and the codes the level builder understands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub boundary: String,
    pub grass: String,
    pub objects: String,
    pub entities: String,
    pub empty_code: i32,
    pub player_code: i32,
    pub tile_trim: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            boundary: "assets/map/map_FloorBlocks.csv".to_string(),
            grass: "assets/map/map_Grass.csv".to_string(),
            objects: "assets/map/map_Objects.csv".to_string(),
            entities: "assets/map/map_Entities.csv".to_string(),
            empty_code: -1,
            player_code: 394,
            tile_trim: 10,
        }
    }
}

/// Top-level game configuration resource.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport size in pixels; the camera keeps the player at its centre.
    pub viewport: (f32, f32),
    /// Simulation ticks per second.
    pub tick_rate: f64,
    pub tile_size: i32,
    /// Animation frames advanced per tick.
    pub animation_speed: f32,
    pub seed: Option<u64>,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub effects: EffectTuning,
    pub map: MapConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: (1280.0, 720.0),
            tick_rate: 60.0,
            tile_size: 64,
            animation_speed: 0.15,
            seed: None,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            effects: EffectTuning::default(),
            map: MapConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load the config, falling back to defaults on any error.
    pub fn load() -> Self {
        load_or_default(CONFIG_PATH)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport.0, self.viewport.1)
    }
}

/// Read a RON data file, logging and falling back to `T::default()` on error.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &str) -> T {
    match read_ron(path) {
        Ok(value) => {
            info!("Loaded {}", path);
            value
        }
        Err(DataLoadError::FileNotFound(path)) => {
            warn!("Could not find {}. Using defaults.", path);
            T::default()
        }
        Err(e) => {
            error!("{}. Using defaults.", e);
            T::default()
        }
    }
}

/// Read and deserialize a RON file.
pub fn read_ron<T: DeserializeOwned>(path: &str) -> Result<T, DataLoadError> {
    if !Path::new(path).exists() {
        return Err(DataLoadError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: GameConfig =
            ron::from_str("(tick_rate: 30.0, player: (attack_lock_ms: 250))").unwrap();

        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.player.attack_lock(), millis(250));
        assert_eq!(config.player.invulnerability(), millis(500));
        assert_eq!(config.enemy.hit_stun_ms, 300);
        assert_eq!(config.tile_size, 64);
    }

    #[test]
    fn missing_file_is_reported() {
        let result: Result<GameConfig, _> = read_ron("assets/data/does_not_exist.ron");
        assert!(matches!(result, Err(DataLoadError::FileNotFound(_))));
    }

    #[test]
    fn shipped_config_parses() {
        let config: GameConfig = read_ron(CONFIG_PATH).unwrap();
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.player.starting_weapon, 1);
        assert_eq!(config.effects.leaf_count, (3, 6));
        assert_eq!(config.map.player_code, 394);
    }
}
