//! Rendering module - art, frame cycling, particles and the y-sorted view.

mod animation;
mod assets;
mod components;
mod depth;
mod particles;
mod plugin;

pub use animation::{paint, AnimationSet, FrameCursor};
pub use assets::GameAssets;
pub use components::*;
pub use depth::{camera_offset, depth_order};
pub use particles::{spawn_particle, Particle};
pub use plugin::RenderingPlugin;
