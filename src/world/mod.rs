//! World module - map layers and level construction.

mod builder;
pub mod data;
mod plugin;

pub use builder::{build_level, cell_bounds, plan_level, tile_hitbox, LevelSummary, Placement};
pub use data::{parse_grid, read_grid, Grid, MapLayers};
pub use plugin::{setup_level, WorldPlugin};
