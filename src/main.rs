//! Wildgrove - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - Space: Attack
//! - Left Ctrl: Cast the selected spell
//! - Q: Next weapon
//! - E: Next spell

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, pixel art sampled without smoothing
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Wildgrove".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )

        // Our game plugin
        .add_plugins(wildgrove::WildgrovePlugin)

        .run();
}
