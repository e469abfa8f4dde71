//! Rendering-related components and resources.

use bevy::prelude::*;

use crate::physics::Bounds;

/// Anything drawn in the world layer.
///
/// `order` is the spawn sequence number. It breaks depth ties and gives
/// every per-tick iteration a stable order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub order: u64,
}

/// Monotonic counter handing out `Drawable` orders.
#[derive(Resource, Default, Debug)]
pub struct SpawnSequence(u64);

impl SpawnSequence {
    pub fn next(&mut self) -> Drawable {
        let order = self.0;
        self.0 += 1;
        Drawable { order }
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Visual box of a purely cosmetic effect that has no collision box.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectBox(pub Bounds);

/// Colour used when an entity has no frame to show.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlaceholderTint(pub Color);

/// The ground image, drawn under everything at the map origin.
#[derive(Component)]
pub struct Floor;

/// Marker for the world camera.
#[derive(Component)]
pub struct WorldCamera;
