//! Level construction from map layers.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use rand::seq::SliceRandom;
use rand::Rng;

use super::data::{Grid, MapLayers};
use crate::combat::{Attackable, Destructible};
use crate::core::{GameConfig, LevelEntity, MapConfig};
use crate::enemies::{spawn_enemy, SpeciesCatalog};
use crate::physics::{Body, Bounds, Obstacle};
use crate::player::spawn_player;
use crate::rendering::{paint, Floor, GameAssets, SpawnSequence};

/// What a non-empty map cell turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Invisible wall.
    Boundary,
    /// Cuttable grass.
    Grass,
    /// Solid decoration; the code picks its art.
    Object(i32),
    Player,
    /// Enemy of the given species index.
    Enemy(usize),
}

/// Every placement in spawn order: boundary, grass, objects, then
/// entities, each layer row by row. Empty cells and entity codes that no
/// species resolves to are skipped.
pub fn plan_level(
    layers: &MapLayers,
    map: &MapConfig,
    species: &SpeciesCatalog,
) -> Vec<(IVec2, Placement)> {
    let filled = |grid: &Grid| {
        grid.cells()
            .filter(|&(_, code)| code != map.empty_code)
            .collect::<Vec<_>>()
    };

    let mut plan = Vec::new();
    plan.extend(
        filled(&layers.boundary)
            .into_iter()
            .map(|(cell, _)| (cell, Placement::Boundary)),
    );
    plan.extend(
        filled(&layers.grass)
            .into_iter()
            .map(|(cell, _)| (cell, Placement::Grass)),
    );
    plan.extend(
        filled(&layers.objects)
            .into_iter()
            .map(|(cell, code)| (cell, Placement::Object(code))),
    );
    for (cell, code) in filled(&layers.entities) {
        if code == map.player_code {
            plan.push((cell, Placement::Player));
        } else if let Some(index) = species.for_code(code) {
            plan.push((cell, Placement::Enemy(index)));
        } else {
            warn!("No species for entity code {} at {:?}", code, cell);
        }
    }
    plan
}

/// Map rectangle of a cell.
pub fn cell_bounds(cell: IVec2, tile: i32) -> Bounds {
    Bounds::new(cell.x * tile, cell.y * tile, tile, tile)
}

/// Tiles collide over the cell minus a strip at the top and bottom.
pub fn tile_hitbox(cell: Bounds, trim: i32) -> Bounds {
    cell.inflate(0, -trim)
}

/// Counts of what a level build produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub obstacles: usize,
    pub grass: usize,
    pub enemies: usize,
    pub player: Option<Entity>,
}

/// Spawn the floor and everything in `plan`.
pub fn build_level(
    commands: &mut Commands,
    sequence: &mut SpawnSequence,
    config: &GameConfig,
    species: &SpeciesCatalog,
    assets: Option<&GameAssets>,
    rng: &mut impl Rng,
    plan: &[(IVec2, Placement)],
) -> LevelSummary {
    let mut summary = LevelSummary::default();
    let tile = config.tile_size;

    if let Some(floor) = assets.and_then(|assets| assets.floor.clone()) {
        commands.spawn((
            Name::new("Floor"),
            Floor,
            LevelEntity,
            Sprite {
                image: floor,
                anchor: Anchor::TopLeft,
                ..default()
            },
        ));
    }

    for &(cell, placement) in plan {
        let visual = cell_bounds(cell, tile);
        let body = Body::new(tile_hitbox(visual, config.map.tile_trim), visual);

        match placement {
            Placement::Boundary => {
                commands.spawn((Obstacle, body, sequence.next(), LevelEntity));
                summary.obstacles += 1;
            }
            Placement::Grass => {
                let art = assets.and_then(|assets| assets.grass.choose(&mut *rng));
                commands.spawn((
                    Name::new("Grass"),
                    Obstacle,
                    Attackable,
                    Destructible,
                    body,
                    sequence.next(),
                    LevelEntity,
                    tile_sprite(art, Color::srgb(0.2, 0.55, 0.2), visual),
                ));
                summary.obstacles += 1;
                summary.grass += 1;
            }
            Placement::Object(code) => {
                let art = assets.and_then(|assets| assets.object_art(code));
                commands.spawn((
                    Name::new(format!("Object {}", code)),
                    Obstacle,
                    body,
                    sequence.next(),
                    LevelEntity,
                    tile_sprite(art, Color::srgb(0.45, 0.4, 0.35), visual),
                ));
                summary.obstacles += 1;
            }
            Placement::Player => {
                if summary.player.is_some() {
                    warn!("Extra player start at {:?} ignored", cell);
                    continue;
                }
                let origin = IVec2::new(visual.x, visual.y);
                summary.player = Some(spawn_player(commands, sequence, config, origin));
            }
            Placement::Enemy(index) => {
                let origin = IVec2::new(visual.x, visual.y);
                if spawn_enemy(commands, sequence, config, species, index, origin).is_some() {
                    summary.enemies += 1;
                }
            }
        }
    }

    summary
}

/// Tile art resting on the cell's bottom edge at its native size.
fn tile_sprite(art: Option<&Handle<Image>>, tint: Color, visual: Bounds) -> Sprite {
    let mut sprite = Sprite {
        anchor: Anchor::BottomCenter,
        ..default()
    };
    paint(&mut sprite, art, tint, visual.size());
    sprite
}
