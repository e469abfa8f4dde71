//! In-game HUD - bars, experience, equipped items and the victory banner.
//!
//! The HUD only reads the player; nothing here feeds back into the
//! simulation.

use bevy::prelude::*;

use crate::core::{GameState, VictoryAchieved};
use crate::player::Player;
use crate::rendering::GameAssets;

const BAR_HEIGHT: f32 = 20.0;
const HEALTH_BAR_WIDTH: f32 = 200.0;
const ENERGY_BAR_WIDTH: f32 = 140.0;
const ITEM_BOX_SIZE: f32 = 80.0;

const BG_COLOR: Color = Color::srgb(0.133, 0.133, 0.133);
const BORDER_COLOR: Color = Color::srgb(0.067, 0.067, 0.067);
const ACTIVE_BORDER_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
const TEXT_COLOR: Color = Color::srgb(0.933, 0.933, 0.933);
const HEALTH_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const ENERGY_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for energy bar fill.
#[derive(Component)]
pub struct EnergyBar;

#[derive(Component)]
pub struct ExpText;

/// Icon of the equipped weapon.
#[derive(Component)]
pub struct WeaponIcon;

/// Icon of the selected spell.
#[derive(Component)]
pub struct SpellIcon;

#[derive(Component)]
pub struct VictoryBanner;

/// Fraction of a bar to fill, in `[0, 1]`. An empty maximum is an empty bar.
pub fn bar_fill(current: i32, max: i32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    (current as f32 / max as f32).clamp(0.0, 1.0)
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_bars, update_exp_text, update_item_icons, show_victory)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("HUD"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, 10.0, HEALTH_BAR_WIDTH, HEALTH_COLOR, HealthBar);
            spawn_bar(parent, 34.0, ENERGY_BAR_WIDTH, ENERGY_COLOR, EnergyBar);

            parent.spawn((
                Text::new("Exp: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                BackgroundColor(BG_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(10.0),
                    top: Val::Px(60.0),
                    ..default()
                },
                ExpText,
            ));

            spawn_item_box(parent, 10.0, WeaponIcon);
            spawn_item_box(parent, 100.0, SpellIcon);
        });

    // Victory banner (hidden until the last enemy falls)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            VictoryBanner,
            HudRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(10.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(BG_COLOR),
                    BorderColor(BORDER_COLOR),
                ))
                .with_children(|frame| {
                    frame.spawn((
                        Text::new("VICTORY!"),
                        TextFont {
                            font_size: 50.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
        });
}

/// Helper to spawn a status bar at `top`.
fn spawn_bar<M: Component>(
    parent: &mut ChildBuilder,
    top: f32,
    width: f32,
    color: Color,
    bar_marker: M,
) {
    parent
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(top),
                width: Val::Px(width),
                height: Val::Px(BAR_HEIGHT),
                border: UiRect::all(Val::Px(3.0)),
                ..default()
            },
            BackgroundColor(BG_COLOR),
            BorderColor(BORDER_COLOR),
        ))
        .with_children(|bg| {
            bg.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color),
                bar_marker,
            ));
        });
}

/// Helper to spawn an item selection box at `left`.
fn spawn_item_box<M: Component>(parent: &mut ChildBuilder, left: f32, icon_marker: M) {
    parent
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(600.0),
                width: Val::Px(ITEM_BOX_SIZE),
                height: Val::Px(ITEM_BOX_SIZE),
                border: UiRect::all(Val::Px(3.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BG_COLOR),
            BorderColor(ACTIVE_BORDER_COLOR),
        ))
        .with_children(|slot| {
            slot.spawn((
                Node {
                    max_width: Val::Px(ITEM_BOX_SIZE),
                    max_height: Val::Px(ITEM_BOX_SIZE),
                    ..default()
                },
                ImageNode::default(),
                Visibility::Hidden,
                icon_marker,
            ));
        });
}

/// Update health and energy bars from the player.
fn update_bars(
    player_query: Query<&Player>,
    mut health_bar: Query<&mut Node, (With<HealthBar>, Without<EnergyBar>)>,
    mut energy_bar: Query<&mut Node, (With<EnergyBar>, Without<HealthBar>)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    if let Ok(mut bar) = health_bar.get_single_mut() {
        bar.width = Val::Percent(bar_fill(player.health, player.stats.health) * 100.0);
    }
    if let Ok(mut bar) = energy_bar.get_single_mut() {
        bar.width = Val::Percent(bar_fill(player.energy, player.stats.energy) * 100.0);
    }
}

fn update_exp_text(player_query: Query<&Player>, mut text_query: Query<&mut Text, With<ExpText>>) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    let label = format!("Exp: {}", player.exp);
    if text.0 != label {
        text.0 = label;
    }
}

/// Show the icons of the equipped weapon and spell. Indices without an
/// icon leave the box empty.
#[allow(clippy::type_complexity)]
fn update_item_icons(
    assets: Option<Res<GameAssets>>,
    player_query: Query<&Player>,
    mut weapon_icon: Query<(&mut ImageNode, &mut Visibility), (With<WeaponIcon>, Without<SpellIcon>)>,
    mut spell_icon: Query<(&mut ImageNode, &mut Visibility), (With<SpellIcon>, Without<WeaponIcon>)>,
) {
    let Some(assets) = assets else {
        return;
    };
    let Ok(player) = player_query.get_single() else {
        return;
    };

    let weapon = assets.weapon_icons.get(player.weapon).and_then(Option::as_ref);
    if let Ok((mut image, mut visibility)) = weapon_icon.get_single_mut() {
        show_icon(&mut image, &mut visibility, weapon);
    }
    let spell = assets.spell_icons.get(player.spell).and_then(Option::as_ref);
    if let Ok((mut image, mut visibility)) = spell_icon.get_single_mut() {
        show_icon(&mut image, &mut visibility, spell);
    }
}

fn show_icon(image: &mut ImageNode, visibility: &mut Visibility, icon: Option<&Handle<Image>>) {
    match icon {
        Some(handle) => {
            if image.image != *handle {
                image.image = handle.clone();
            }
            *visibility = Visibility::Inherited;
        }
        None => *visibility = Visibility::Hidden,
    }
}

/// Reveal the banner when victory is announced.
fn show_victory(
    mut victories: EventReader<VictoryAchieved>,
    mut banner: Query<&mut Visibility, With<VictoryBanner>>,
) {
    if victories.read().count() == 0 {
        return;
    }
    for mut visibility in banner.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerTuning;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::rstest;

    #[rstest]
    #[case(50, 100, 0.5)]
    #[case(100, 100, 1.0)]
    #[case(150, 100, 1.0)]
    #[case(-5, 100, 0.0)]
    #[case(10, 0, 0.0)]
    #[case(10, -3, 0.0)]
    fn bar_fill_is_clamped(#[case] current: i32, #[case] max: i32, #[case] expected: f32) {
        assert_eq!(bar_fill(current, max), expected);
    }

    #[test]
    fn bars_follow_player() {
        let mut world = World::new();
        let mut player = Player::new(&PlayerTuning::default());
        player.health = 25;
        player.energy = 60;
        world.spawn(player);
        let health = world.spawn((Node::default(), HealthBar)).id();
        let energy = world.spawn((Node::default(), EnergyBar)).id();

        world.run_system_once(update_bars).unwrap();

        assert_eq!(world.get::<Node>(health).unwrap().width, Val::Percent(25.0));
        assert_eq!(world.get::<Node>(energy).unwrap().width, Val::Percent(100.0));
    }

    #[test]
    fn banner_appears_on_victory() {
        let mut world = World::new();
        world.init_resource::<Events<VictoryAchieved>>();
        let banner = world.spawn((Visibility::Hidden, VictoryBanner)).id();

        world.run_system_once(show_victory).unwrap();
        assert_eq!(*world.get::<Visibility>(banner).unwrap(), Visibility::Hidden);

        world.send_event(VictoryAchieved);
        world.run_system_once(show_victory).unwrap();
        assert_eq!(*world.get::<Visibility>(banner).unwrap(), Visibility::Inherited);
    }
}
