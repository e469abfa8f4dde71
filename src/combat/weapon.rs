//! Weapon hitbox factory.
//!
//! A swing request builds one hitbox beside the player on the facing side;
//! the matching sheathe request removes it. The player holds the hitbox in
//! its `WeaponSlot` for the duration of the attack.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::components::{AttackHitbox, DamageKind};
use super::data::WeaponCatalog;
use crate::core::{LevelEntity, WeaponSheathed, WeaponSwing};
use crate::physics::{Body, Bounds};
use crate::player::{Facing, Player, WeaponSlot};
use crate::rendering::{paint, GameAssets, PlaceholderTint, SpawnSequence};

/// Where a weapon of `size` (sideways) sits for a player drawn in `visual`.
pub fn weapon_bounds(visual: Bounds, facing: Facing, size: (i32, i32)) -> Bounds {
    let (w, h) = match facing {
        Facing::Left | Facing::Right => size,
        Facing::Up | Facing::Down => (size.1, size.0),
    };
    let mut bounds = Bounds::new(0, 0, w, h);
    match facing {
        Facing::Right => bounds.set_mid_left(visual.mid_right() + IVec2::new(0, 16)),
        Facing::Left => bounds.set_mid_right(visual.mid_left() + IVec2::new(0, 16)),
        Facing::Down => bounds.set_mid_top(visual.mid_bottom() + IVec2::new(-10, 0)),
        Facing::Up => bounds.set_mid_bottom(visual.mid_top() + IVec2::new(-10, 0)),
    }
    bounds
}

/// Remove hitboxes whose attack ended. Runs before [`swing_weapons`].
pub fn sheathe_weapons(
    mut commands: Commands,
    mut sheathes: EventReader<WeaponSheathed>,
    mut players: Query<&mut WeaponSlot>,
) {
    for request in sheathes.read() {
        let Ok(mut slot) = players.get_mut(request.player) else {
            continue;
        };
        if let Some(weapon) = slot.0.take() {
            commands.entity(weapon).despawn_recursive();
        }
    }
}

/// Build a hitbox for each swing request.
pub fn swing_weapons(
    mut commands: Commands,
    mut sequence: ResMut<SpawnSequence>,
    weapons: Res<WeaponCatalog>,
    assets: Option<Res<GameAssets>>,
    mut swings: EventReader<WeaponSwing>,
    mut players: Query<(&Player, &Body, &mut WeaponSlot)>,
) {
    for request in swings.read() {
        let Ok((player, body, mut slot)) = players.get_mut(request.player) else {
            continue;
        };
        let Some(weapon) = weapons.get(player.weapon) else {
            continue;
        };

        if let Some(stale) = slot.0.take() {
            commands.entity(stale).despawn_recursive();
        }

        let facing = player.status.facing;
        let bounds = weapon_bounds(body.visual, facing, weapon.size);
        let tint = Color::srgb(0.8, 0.8, 0.85);

        let mut sprite = Sprite {
            anchor: Anchor::BottomCenter,
            ..default()
        };
        let art = assets
            .as_deref()
            .and_then(|assets| assets.weapon_art(player.weapon, facing));
        paint(&mut sprite, art, tint, bounds.size());
        // Drawn at hitbox size whatever the art's native size
        sprite.custom_size = Some(bounds.size().as_vec2());

        let hitbox = commands
            .spawn((
                Name::new(weapon.name.clone()),
                AttackHitbox {
                    owner: request.player,
                    kind: DamageKind::Melee,
                },
                Body::solid(bounds),
                PlaceholderTint(tint),
                sequence.next(),
                LevelEntity,
                sprite,
            ))
            .id();
        slot.0 = Some(hitbox);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerTuning;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::rstest;

    const PLAYER: Bounds = Bounds::new(100, 100, 64, 64);

    #[rstest]
    #[case(Facing::Right, Bounds::new(164, 138, 40, 20))]
    #[case(Facing::Left, Bounds::new(60, 138, 40, 20))]
    #[case(Facing::Down, Bounds::new(112, 164, 20, 40))]
    #[case(Facing::Up, Bounds::new(112, 60, 20, 40))]
    fn weapon_sits_on_facing_side(#[case] facing: Facing, #[case] expected: Bounds) {
        assert_eq!(weapon_bounds(PLAYER, facing, (40, 20)), expected);
    }

    #[test]
    fn swing_then_sheathe() {
        let mut world = World::new();
        world.init_resource::<SpawnSequence>();
        world.insert_resource(WeaponCatalog::default());
        world.init_resource::<Events<WeaponSwing>>();
        world.init_resource::<Events<WeaponSheathed>>();

        let player = world
            .spawn((
                Player::new(&PlayerTuning::default()),
                Body::new(PLAYER, PLAYER),
                WeaponSlot::default(),
            ))
            .id();

        world.send_event(WeaponSwing { player });
        world.run_system_once(swing_weapons).unwrap();

        let weapon = world.get::<WeaponSlot>(player).unwrap().0.unwrap();
        let hitbox = world.get::<AttackHitbox>(weapon).unwrap();
        assert_eq!(hitbox.kind, DamageKind::Melee);
        assert_eq!(hitbox.owner, player);

        world.send_event(WeaponSheathed { player });
        world.run_system_once(sheathe_weapons).unwrap();

        assert!(world.get::<WeaponSlot>(player).unwrap().0.is_none());
        assert!(world.get::<AttackHitbox>(weapon).is_none());
    }
}
