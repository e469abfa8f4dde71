//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The simulation
//! only ticks in `InGame`; `Resetting` is a one-frame bounce that tears the
//! level down and builds a fresh one.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` (data files are read during plugin build)
/// - `InGame` runs the fixed-rate simulation and rendering
/// - `Resetting` is entered when the player dies and immediately returns
///   to `InGame`, which rebuilds the level from scratch
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Player has died, session is being rebuilt
    Resetting,
}

/// Marker for every entity that belongs to the current session.
///
/// Everything tagged with this is despawned when leaving `InGame`.
#[derive(Component, Default)]
pub struct LevelEntity;
