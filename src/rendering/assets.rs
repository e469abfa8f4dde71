//! Every image the game draws, loaded once on startup.
//!
//! Lookups never fail: a missing folder or file just leaves a hole that the
//! drawing code fills with a placeholder quad.

use std::collections::HashMap;
use std::path::Path;

use bevy::prelude::*;

use super::animation::{list_frames, load_frames, load_optional, AnimationSet};
use crate::combat::{SpellCatalog, WeaponCatalog};
use crate::core::EffectKind;
use crate::enemies::{AiState, SpeciesCatalog};
use crate::player::{Facing, Mode, PlayerStatus};

pub const GRASS_FOLDER: &str = "graphics/grass";
pub const OBJECTS_FOLDER: &str = "graphics/objects";
pub const FLOOR_IMAGE: &str = "graphics/tilemap/ground.png";

/// Handles for all game art.
#[derive(Resource, Default)]
pub struct GameAssets {
    pub player: AnimationSet<PlayerStatus>,
    /// Keyed by species index and behaviour state.
    pub monsters: AnimationSet<(usize, AiState)>,
    pub effects: AnimationSet<EffectKind>,
    /// Grass variants, picked at random per tile.
    pub grass: Vec<Handle<Image>>,
    /// Object art keyed by object-layer code.
    pub objects: HashMap<i32, Handle<Image>>,
    pub floor: Option<Handle<Image>>,
    /// Per weapon index.
    pub weapon_icons: Vec<Option<Handle<Image>>>,
    /// Per spell index.
    pub spell_icons: Vec<Option<Handle<Image>>>,
    weapon_swings: HashMap<(usize, Facing), Handle<Image>>,
}

impl GameAssets {
    /// Art for weapon `weapon` swung towards `facing`.
    pub fn weapon_art(&self, weapon: usize, facing: Facing) -> Option<&Handle<Image>> {
        self.weapon_swings.get(&(weapon, facing))
    }

    pub fn object_art(&self, code: i32) -> Option<&Handle<Image>> {
        self.objects.get(&code)
    }
}

/// Object images are named after their layer code (`12.png`).
fn object_codes(folder: &str) -> Vec<(i32, String)> {
    list_frames(folder)
        .into_iter()
        .filter_map(|path| {
            let code = Path::new(&path).file_stem()?.to_str()?.parse().ok()?;
            Some((code, path))
        })
        .collect()
}

/// Load all art. Runs on entering `Loading`, before the first level build.
pub fn load_game_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    weapons: Res<WeaponCatalog>,
    spells: Res<SpellCatalog>,
    species: Res<SpeciesCatalog>,
) {
    let mut assets = GameAssets::default();

    for facing in Facing::ALL {
        for mode in Mode::ALL {
            let status = PlayerStatus::new(facing, mode);
            assets
                .player
                .insert(status, load_frames(&asset_server, &status.folder()));
        }
    }

    for (index, spec) in species.species.iter().enumerate() {
        for state in AiState::ALL {
            let folder = format!("graphics/monsters/{}/{}", spec.name, state.name());
            assets
                .monsters
                .insert((index, state), load_frames(&asset_server, &folder));
        }
    }

    for kind in EffectKind::ALL {
        assets.effects.insert(kind, load_frames(&asset_server, kind.folder()));
    }

    assets.grass = load_frames(&asset_server, GRASS_FOLDER);
    assets.objects = object_codes(OBJECTS_FOLDER)
        .into_iter()
        .map(|(code, path)| (code, asset_server.load(path)))
        .collect();
    assets.floor = load_optional(&asset_server, FLOOR_IMAGE);

    for (index, weapon) in weapons.weapons.iter().enumerate() {
        for facing in Facing::ALL {
            if let Some(handle) = load_optional(&asset_server, &weapon.swing_art(facing.name())) {
                assets.weapon_swings.insert((index, facing), handle);
            }
        }
        assets.weapon_icons.push(load_optional(&asset_server, &weapon.icon));
    }
    assets.spell_icons = spells
        .spells
        .iter()
        .map(|spell| load_optional(&asset_server, &spell.icon))
        .collect();

    info!(
        "Loaded art: {} grass variants, {} objects, floor {}",
        assets.grass.len(),
        assets.objects.len(),
        if assets.floor.is_some() { "present" } else { "missing" }
    );
    commands.insert_resource(assets);
}
