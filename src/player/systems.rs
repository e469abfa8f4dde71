//! Player systems - per-tick update, experience, death and spawning.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::components::*;
use super::controller::PlayerActions;
use crate::combat::{SpellCatalog, WeaponCatalog};
use crate::core::{
    ExperienceGained, GameConfig, GameState, LevelEntity, SpellCast, WeaponSheathed, WeaponSwing,
};
use crate::physics::{Body, Bounds, ObstacleSet};
use crate::rendering::{paint, FrameCursor, GameAssets, PlaceholderTint, SpawnSequence};

/// Event writers backing the player's scene capabilities.
#[derive(SystemParam)]
pub struct ActionRequests<'w> {
    swings: EventWriter<'w, WeaponSwing>,
    sheathes: EventWriter<'w, WeaponSheathed>,
    casts: EventWriter<'w, SpellCast>,
}

/// [`PlayerActions`] for one player entity, delivered as events to the
/// combat factories that run right after the player update.
struct SceneActions<'a, 'w> {
    player: Entity,
    requests: &'a mut ActionRequests<'w>,
}

impl PlayerActions for SceneActions<'_, '_> {
    fn create_attack(&mut self) {
        self.requests.swings.send(WeaponSwing {
            player: self.player,
        });
    }

    fn destroy_attack(&mut self) {
        self.requests.sheathes.send(WeaponSheathed {
            player: self.player,
        });
    }

    fn create_magic(&mut self, spell: usize, strength: i32, cost: i32) {
        self.requests.casts.send(SpellCast {
            player: self.player,
            spell,
            strength,
            cost,
        });
    }
}

/// Map the keyboard to an intent: WASD to move, Space to swing, left Ctrl to
/// cast, Q and E to cycle weapon and spell.
pub fn intent_from_keys(keyboard: &ButtonInput<KeyCode>) -> Intent {
    Intent {
        up: keyboard.pressed(KeyCode::KeyW),
        down: keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::KeyD),
        attack: keyboard.pressed(KeyCode::Space),
        cast: keyboard.pressed(KeyCode::ControlLeft),
        next_weapon: keyboard.pressed(KeyCode::KeyQ),
        next_spell: keyboard.pressed(KeyCode::KeyE),
    }
}

/// One tick of the player: input, cooldowns, status, animation, motion,
/// then leveling.
#[allow(clippy::too_many_arguments)]
pub fn update_player(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    weapons: Res<WeaponCatalog>,
    spells: Res<SpellCatalog>,
    obstacles: Res<ObstacleSet>,
    assets: Option<Res<GameAssets>>,
    mut requests: ActionRequests,
    mut query: Query<(
        Entity,
        &mut Player,
        &mut Body,
        &mut FrameCursor,
        Option<&mut Sprite>,
        &PlaceholderTint,
    )>,
) {
    let Ok((entity, mut player, mut body, mut cursor, sprite, tint)) = query.get_single_mut() else {
        return;
    };
    let now = time.elapsed();
    let intent = intent_from_keys(&keyboard);
    let mut actions = SceneActions {
        player: entity,
        requests: &mut requests,
    };

    let mut direction = body.direction;
    player.read_input(&intent, &mut direction, now, &weapons, &spells, &mut actions);
    player.tick_cooldowns(now, &mut actions);
    player.update_status(&mut direction);
    body.direction = direction;

    let frames = assets
        .as_deref()
        .map(|assets| assets.player.frames(&player.status))
        .unwrap_or(&[]);
    cursor.advance(frames.len(), config.animation_speed);
    if let Some(mut sprite) = sprite {
        paint(&mut sprite, cursor.pick(frames), tint.0, body.visual.size());
    }

    body.step(player.stats.speed, &obstacles.0);

    if player.level_up(&config.player.level_up) > 0 {
        info!("Leveled up to {}!", player.level);
    }
}

/// Bank experience paid out by dead enemies. Leveling happens on the
/// player's next update.
pub fn grant_experience(
    mut rewards: EventReader<ExperienceGained>,
    mut query: Query<&mut Player>,
) {
    let Ok(mut player) = query.get_single_mut() else {
        rewards.clear();
        return;
    };
    for reward in rewards.read() {
        player.exp += reward.amount;
    }
}

/// Remove a dead player and reset the session.
pub fn check_player_death(
    mut commands: Commands,
    query: Query<(Entity, &Player)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok((entity, player)) = query.get_single() else {
        return;
    };
    if player.is_dead() {
        info!("Player died at level {}", player.level);
        commands.entity(entity).despawn_recursive();
        next_state.set(GameState::Resetting);
    }
}

/// Collision box for a player drawn in `visual`: a fraction of the sprite,
/// centred horizontally and resting on its bottom edge.
pub fn player_hitbox(visual: Bounds, scale: (f32, f32)) -> Bounds {
    let w = (visual.w as f32 * scale.0) as i32;
    let h = (visual.h as f32 * scale.1) as i32;
    let mut hitbox = Bounds::new(0, 0, w, h);
    hitbox.set_mid_bottom(visual.mid_bottom());
    hitbox
}

/// Spawn the player with its visual box's top-left at `origin`.
pub fn spawn_player(
    commands: &mut Commands,
    sequence: &mut SpawnSequence,
    config: &GameConfig,
    origin: IVec2,
) -> Entity {
    let tuning = &config.player;
    let visual = Bounds::new(origin.x, origin.y, tuning.sprite_size.0, tuning.sprite_size.1);
    let hitbox = player_hitbox(visual, tuning.hitbox_scale);

    commands
        .spawn((
            Player::new(tuning),
            Body::new(hitbox, visual),
            WeaponSlot::default(),
            FrameCursor::default(),
            PlaceholderTint(Color::srgb(0.85, 0.75, 0.35)),
            sequence.next(),
            LevelEntity,
            Sprite {
                anchor: Anchor::BottomCenter,
                ..default()
            },
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Facing, Mode, PlayerStatus};
    use bevy::ecs::system::RunSystemOnce;

    fn tick_world(pressed: &[KeyCode]) -> (World, Entity) {
        let mut world = World::new();
        world.init_resource::<Time>();
        world.insert_resource(GameConfig::default());
        world.insert_resource(WeaponCatalog::default());
        world.insert_resource(SpellCatalog::default());
        world.init_resource::<ObstacleSet>();
        world.init_resource::<Events<WeaponSwing>>();
        world.init_resource::<Events<WeaponSheathed>>();
        world.init_resource::<Events<SpellCast>>();

        let mut keyboard = ButtonInput::<KeyCode>::default();
        for &key in pressed {
            keyboard.press(key);
        }
        world.insert_resource(keyboard);

        let config = GameConfig::default();
        let visual = Bounds::new(128, 64, 64, 64);
        let player = world
            .spawn((
                Player::new(&config.player),
                Body::new(player_hitbox(visual, config.player.hitbox_scale), visual),
                FrameCursor::default(),
                PlaceholderTint(Color::WHITE),
            ))
            .id();
        (world, player)
    }

    #[test]
    fn hitbox_sits_on_sprite_feet() {
        let visual = Bounds::new(128, 64, 64, 64);
        let hitbox = player_hitbox(visual, (0.5, 0.35));
        assert_eq!(hitbox, Bounds::new(144, 106, 32, 22));
        assert_eq!(hitbox.mid_bottom(), visual.mid_bottom());
    }

    #[test]
    fn experience_is_banked_for_next_update() {
        let mut world = World::new();
        world.init_resource::<Events<ExperienceGained>>();
        let player = world.spawn(Player::new(&Default::default())).id();

        world.send_event(ExperienceGained { amount: 50 });
        world.send_event(ExperienceGained { amount: 70 });
        world.run_system_once(grant_experience).unwrap();

        let player = world.get::<Player>(player).unwrap();
        assert_eq!(player.exp, 120);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn dead_player_resets_session() {
        let mut world = World::new();
        world.init_resource::<NextState<GameState>>();
        let mut dead = Player::new(&Default::default());
        dead.health = 0;
        let player = world.spawn(dead).id();

        world.run_system_once(check_player_death).unwrap();

        assert!(world.get::<Player>(player).is_none());
        assert!(matches!(
            world.resource::<NextState<GameState>>(),
            NextState::Pending(GameState::Resetting)
        ));
    }

    #[test]
    fn input_moves_player_in_one_update() {
        let (mut world, player) = tick_world(&[KeyCode::KeyD]);

        world.run_system_once(update_player).unwrap();

        assert_eq!(
            world.get::<Player>(player).unwrap().status,
            PlayerStatus::new(Facing::Right, Mode::Moving)
        );
        let body = world.get::<Body>(player).unwrap();
        assert_eq!(body.hitbox, Bounds::new(150, 106, 32, 22));
        assert_eq!(body.visual.mid_bottom(), body.hitbox.mid_bottom());
    }

    #[test]
    fn swing_holds_player_still_in_one_update() {
        let (mut world, player) = tick_world(&[KeyCode::KeyD, KeyCode::Space]);

        world.run_system_once(update_player).unwrap();

        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.status.mode, Mode::Attack);
        assert!(p.is_attacking());
        assert_eq!(world.get::<Body>(player).unwrap().hitbox.x, 144);
        let swings: Vec<WeaponSwing> = world.resource_mut::<Events<WeaponSwing>>().drain().collect();
        assert_eq!(swings, vec![WeaponSwing { player }]);
    }
}
