//! UI module - read-only presentation of player state.

mod hud;
mod plugin;

pub use hud::bar_fill;
pub use plugin::UiPlugin;
