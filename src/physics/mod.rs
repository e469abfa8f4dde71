//! Physics module - integer boxes and axis-separated motion.

mod bounds;
mod motion;
mod plugin;

pub use bounds::Bounds;
pub use motion::{collect_obstacles, Body, Obstacle, ObstacleSet};
pub use plugin::PhysicsPlugin;
