//! Camera follow and top-down depth sorting.
//!
//! Map space has its origin at the top-left with y growing downwards. Each
//! frame every drawable sprite is moved to its map position relative to the
//! camera offset and layered by the vertical centre of its collision box.

use bevy::prelude::*;

use super::components::{Drawable, EffectBox, Floor};
use crate::core::GameConfig;
use crate::physics::{Body, Bounds};
use crate::player::Player;

/// Base z of the sorted layer; the floor sits below it at 0.
const LAYER_BASE: f32 = 1.0;
const LAYER_STEP: f32 = 0.001;

/// Indices of `keys` in ascending order. Equal keys keep their input order.
pub fn depth_order(keys: &[i32]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.sort_by_key(|&i| keys[i]);
    indices
}

/// Top-left of the view in map space: the player stays centred.
pub fn camera_offset(player_hitbox: Bounds, viewport: Vec2) -> Vec2 {
    player_hitbox.center().as_vec2() - viewport / 2.0
}

/// A map point as a world translation for a camera at the origin.
pub fn to_world(point: IVec2, offset: Vec2, viewport: Vec2) -> Vec2 {
    let screen = point.as_vec2() - offset;
    Vec2::new(screen.x - viewport.x / 2.0, viewport.y / 2.0 - screen.y)
}

/// Depth key and drawn box of an entity: the collision box centre if it has
/// one, the effect box otherwise.
fn depth_key(body: Option<&Body>, effect: Option<&EffectBox>) -> Option<(i32, Bounds)> {
    match (body, effect) {
        (Some(body), _) => Some((body.hitbox.center().y, body.visual)),
        (None, Some(effect)) => Some((effect.0.center().y, effect.0)),
        (None, None) => None,
    }
}

/// Place every sprite for this frame.
#[allow(clippy::type_complexity)]
pub fn sync_world_sprites(
    config: Res<GameConfig>,
    players: Query<&Body, With<Player>>,
    mut drawables: Query<
        (&Drawable, Option<&Body>, Option<&EffectBox>, &mut Transform),
        Without<Floor>,
    >,
    mut floors: Query<&mut Transform, (With<Floor>, Without<Drawable>)>,
) {
    let Ok(player) = players.get_single() else {
        return;
    };
    let viewport = config.viewport_size();
    let offset = camera_offset(player.hitbox, viewport);

    for mut transform in floors.iter_mut() {
        transform.translation = to_world(IVec2::ZERO, offset, viewport).extend(0.0);
    }

    let mut entries: Vec<_> = drawables
        .iter_mut()
        .filter_map(|(drawable, body, effect, transform)| {
            let (key, visual) = depth_key(body, effect)?;
            Some((drawable.order, key, visual, transform))
        })
        .collect();
    entries.sort_by_key(|(order, ..)| *order);

    let keys: Vec<i32> = entries.iter().map(|(_, key, ..)| *key).collect();
    for (layer, index) in depth_order(&keys).into_iter().enumerate() {
        let (_, _, visual, transform) = &mut entries[index];
        let z = LAYER_BASE + layer as f32 * LAYER_STEP;
        transform.translation = to_world(visual.mid_bottom(), offset, viewport).extend(z);
    }
}
