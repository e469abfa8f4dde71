//! Integer pixel rectangles.
//!
//! Map space has its origin at the top-left with y growing downwards, the
//! same as the tile grid. Rectangles are half-open: `right()` and `bottom()`
//! are the first pixel outside the box.

use bevy::prelude::*;

/// Axis-aligned integer rectangle used for collision and visual boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A box of `size` with its centre on `center`.
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        let mut bounds = Self::new(0, 0, size.x, size.y);
        bounds.set_center(center);
        bounds
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub const fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub const fn mid_top(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y)
    }

    pub const fn mid_bottom(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.bottom())
    }

    pub const fn mid_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y + self.h / 2)
    }

    pub const fn mid_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.y + self.h / 2)
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.x = center.x - self.w / 2;
        self.y = center.y - self.h / 2;
    }

    pub fn set_mid_top(&mut self, point: IVec2) {
        self.x = point.x - self.w / 2;
        self.y = point.y;
    }

    pub fn set_mid_bottom(&mut self, point: IVec2) {
        self.x = point.x - self.w / 2;
        self.y = point.y - self.h;
    }

    pub fn set_mid_left(&mut self, point: IVec2) {
        self.x = point.x;
        self.y = point.y - self.h / 2;
    }

    pub fn set_mid_right(&mut self, point: IVec2) {
        self.x = point.x - self.w;
        self.y = point.y - self.h / 2;
    }

    /// Grow (or shrink, with negative deltas) about the centre.
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }

    /// Positive-area overlap. Touching edges do not collide and an empty
    /// box collides with nothing.
    pub fn collides(&self, other: &Bounds) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Bounds::new(0, 0, 64, 64);
        let right = Bounds::new(64, 0, 64, 64);
        let below = Bounds::new(0, 64, 64, 64);
        assert!(!a.collides(&right));
        assert!(!a.collides(&below));
        assert!(a.collides(&Bounds::new(63, 63, 2, 2)));
    }

    #[test]
    fn empty_box_never_collides() {
        let a = Bounds::new(0, 0, 64, 64);
        assert!(!a.collides(&Bounds::new(10, 10, 0, 10)));
    }

    #[test]
    fn inflate_keeps_centre() {
        let tile = Bounds::new(64, 128, 64, 64);
        let trimmed = tile.inflate(0, -10);
        assert_eq!(trimmed, Bounds::new(64, 133, 64, 54));
        assert_eq!(trimmed.center(), tile.center());
    }

    #[test]
    fn anchors_round_trip() {
        let mut b = Bounds::new(0, 0, 32, 22);
        b.set_mid_bottom(IVec2::new(100, 200));
        assert_eq!(b.mid_bottom(), IVec2::new(100, 200));
        assert_eq!(b, Bounds::new(84, 178, 32, 22));

        b.set_mid_left(IVec2::new(10, 10));
        assert_eq!(b.mid_left(), IVec2::new(10, 10));

        b.set_mid_right(IVec2::new(50, 60));
        assert_eq!(b.mid_right(), IVec2::new(50, 60));

        b.set_mid_top(IVec2::new(7, 3));
        assert_eq!(b.mid_top(), IVec2::new(7, 3));
    }
}
