//! Core plugin that sets up game states, events, timing and configuration.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::rng::GameRng;
use super::schedule::SimSet;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The game config and the fixed simulation rate
/// - Game states (Loading, InGame, Resetting)
/// - Global events (SpawnEffect, WeaponSwing, ExperienceGained, etc.)
/// - The chained `SimSet` ordering inside `FixedUpdate`
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = GameConfig::load();

        app
            // Fixed-rate simulation clock
            .insert_resource(Time::<Fixed>::from_hz(config.tick_rate))
            .insert_resource(GameRng::new(config.seed))
            .insert_resource(config)

            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<SpawnEffect>()
            .add_event::<WeaponSwing>()
            .add_event::<WeaponSheathed>()
            .add_event::<SpellCast>()
            .add_event::<ExperienceGained>()
            .add_event::<VictoryAchieved>()

            // One tick: motion before combat before cleanup
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Prepare,
                    SimSet::Player,
                    SimSet::Actions,
                    SimSet::Enemies,
                    SimSet::Combat,
                    SimSet::Cleanup,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Data is loaded synchronously during plugin build
            .add_systems(OnEnter(GameState::Loading), start_session)
            .add_systems(OnEnter(GameState::Resetting), restart_session);
    }
}

/// Immediately transition from Loading to InGame.
fn start_session(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Bounce straight back into a fresh session after the player died.
fn restart_session(mut next_state: ResMut<NextState<GameState>>) {
    info!("Restarting session");
    next_state.set(GameState::InGame);
}
