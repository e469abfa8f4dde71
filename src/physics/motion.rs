//! Entity motion and axis-separated collision against static obstacles.

use bevy::prelude::*;

use super::bounds::Bounds;
use crate::rendering::Drawable;

/// Marker for entities that block motion.
#[derive(Component, Default)]
pub struct Obstacle;

/// A body in map space.
///
/// `pos` is the sub-pixel top-left of the collision box; the collision box
/// itself is always the rounded position. The visual box hangs from the
/// collision box's bottom centre.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub hitbox: Bounds,
    pub visual: Bounds,
    /// Unit length or zero.
    pub direction: Vec2,
}

impl Body {
    /// Build a body from its collision and visual boxes as placed on the map.
    pub fn new(hitbox: Bounds, visual: Bounds) -> Self {
        Self {
            pos: Vec2::new(hitbox.x as f32, hitbox.y as f32),
            hitbox,
            visual,
            direction: Vec2::ZERO,
        }
    }

    /// A body whose collision box is its visual box (hitboxes, particles).
    pub fn solid(bounds: Bounds) -> Self {
        Self::new(bounds, bounds)
    }

    /// Move along `direction` at `speed` pixels per tick.
    ///
    /// Each axis is applied and resolved on its own, X first, so a body
    /// sliding into a corner is clamped by whichever wall it meets on each
    /// axis rather than by a combined diagonal test.
    pub fn step(&mut self, speed: f32, obstacles: &[Bounds]) {
        self.direction = self.direction.normalize_or_zero();
        let delta = self.direction * speed;

        self.pos.x += delta.x;
        self.hitbox.x = snap(self.pos.x);
        for obstacle in obstacles {
            if obstacle.collides(&self.hitbox) {
                if delta.x > 0.0 {
                    self.hitbox.set_right(obstacle.left());
                } else if delta.x < 0.0 {
                    self.hitbox.set_left(obstacle.right());
                }
                self.pos.x = self.hitbox.x as f32;
            }
        }

        self.pos.y += delta.y;
        self.hitbox.y = snap(self.pos.y);
        for obstacle in obstacles {
            if obstacle.collides(&self.hitbox) {
                if delta.y > 0.0 {
                    self.hitbox.set_bottom(obstacle.top());
                } else if delta.y < 0.0 {
                    self.hitbox.set_top(obstacle.bottom());
                }
                self.pos.y = self.hitbox.y as f32;
            }
        }

        self.visual.set_mid_bottom(self.hitbox.mid_bottom());
    }
}

/// Round half to even, matching how positions were snapped to pixels.
fn snap(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// Snapshot of every obstacle's blocking box for this tick, in spawn order.
///
/// Obstacles block with their whole drawn cell; their trimmed collision box
/// only sets draw depth.
#[derive(Resource, Default, Debug)]
pub struct ObstacleSet(pub Vec<Bounds>);

/// Rebuild the obstacle snapshot. Runs at the start of each tick, so
/// obstacles removed last tick (cut grass) no longer block.
pub fn collect_obstacles(
    mut obstacles: ResMut<ObstacleSet>,
    query: Query<(&Body, &Drawable), With<Obstacle>>,
) {
    let mut ordered: Vec<(u64, Bounds)> = query
        .iter()
        .map(|(body, drawable)| (drawable.order, body.visual))
        .collect();
    ordered.sort_by_key(|(order, _)| *order);

    obstacles.0.clear();
    obstacles.0.extend(ordered.into_iter().map(|(_, cell)| cell));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::SpawnSequence;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::rstest;

    fn body_at(x: i32, y: i32) -> Body {
        Body::new(Bounds::new(x, y, 32, 22), Bounds::new(x - 16, y - 42, 64, 64))
    }

    #[rstest]
    #[case(Vec2::new(1.0, 0.0))]
    #[case(Vec2::new(0.0, -1.0))]
    #[case(Vec2::new(1.0, 1.0))]
    #[case(Vec2::new(-1.0, 1.0))]
    #[case(Vec2::new(3.0, -4.0))]
    fn direction_is_unit_length_after_step(#[case] direction: Vec2) {
        let mut body = body_at(0, 0);
        body.direction = direction;
        body.step(6.0, &[]);

        assert_relative_eq!(body.direction.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!((body.pos - Vec2::ZERO).length(), 6.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_direction_stays_zero() {
        let mut body = body_at(10, 10);
        body.step(6.0, &[]);
        assert_eq!(body.direction, Vec2::ZERO);
        assert_eq!(body.hitbox.x, 10);
        assert_eq!(body.hitbox.y, 10);
    }

    #[test]
    fn hitbox_is_rounded_position() {
        let mut body = body_at(0, 0);
        body.direction = Vec2::new(1.0, 0.0);
        body.step(0.4, &[]);
        assert_eq!(body.hitbox.x, 0);
        body.step(0.4, &[]);
        assert_eq!(body.hitbox.x, 1);
        assert_relative_eq!(body.pos.x, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn wall_clamps_right_edge() {
        let wall = Bounds::new(40, -100, 64, 300);
        let mut body = body_at(0, 0);
        body.direction = Vec2::new(1.0, 0.0);
        for _ in 0..10 {
            body.step(6.0, &[wall]);
        }
        assert_eq!(body.hitbox.right(), wall.left());
        assert_relative_eq!(body.pos.x, 8.0);
    }

    #[test]
    fn diagonal_into_l_corner_resolves_each_axis() {
        // Wall to the right and floor below form an inside corner.
        let right_wall = Bounds::new(50, -200, 64, 400);
        let floor = Bounds::new(-200, 40, 400, 64);
        let mut body = body_at(0, 0);
        body.direction = Vec2::new(1.0, 1.0);

        for _ in 0..30 {
            body.step(6.0, &[right_wall, floor]);
            assert!(!body.hitbox.collides(&right_wall));
            assert!(!body.hitbox.collides(&floor));
        }

        assert_eq!(body.hitbox.right(), right_wall.left());
        assert_eq!(body.hitbox.bottom(), floor.top());
    }

    #[test]
    fn blocked_axis_does_not_stop_the_other() {
        let right_wall = Bounds::new(32, -200, 64, 400);
        let mut body = body_at(0, 0);
        body.direction = Vec2::new(1.0, 1.0);
        body.step(6.0, &[right_wall]);

        assert_eq!(body.hitbox.x, 0);
        assert!(body.hitbox.y > 0);
    }

    #[test]
    fn visual_box_follows_collision_box() {
        let mut body = body_at(100, 100);
        body.direction = Vec2::new(-1.0, 0.0);
        body.step(6.0, &[]);
        assert_eq!(body.visual.mid_bottom(), body.hitbox.mid_bottom());
    }

    #[test]
    fn tiles_block_with_their_whole_cell() {
        let mut world = World::new();
        world.init_resource::<ObstacleSet>();
        let mut sequence = SpawnSequence::default();

        // Cell (1, 1) with its collision box trimmed 5 px top and bottom
        let cell = Bounds::new(64, 64, 64, 64);
        let trimmed = cell.inflate(0, -10);
        world.spawn((Obstacle, Body::new(trimmed, cell), sequence.next()));

        world.run_system_once(collect_obstacles).unwrap();
        assert_eq!(world.resource::<ObstacleSet>().0, vec![cell]);

        // Feet level with the cell's top strip, above the trimmed box
        let mut body = Body::new(Bounds::new(20, 45, 32, 22), Bounds::new(4, 3, 64, 64));
        assert_eq!(body.hitbox.bottom(), 67);
        body.direction = Vec2::new(1.0, 0.0);
        for _ in 0..20 {
            body.step(6.0, &world.resource::<ObstacleSet>().0);
        }

        assert_eq!(body.hitbox.right(), cell.left());
        assert!(!body.hitbox.collides(&cell));
    }
}
