//! Axis-aligned rectangle geometry
//!
//! Screen space: x grows right, y grows down, `min` is the top-left corner.

use glam::Vec2;

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.min = center - self.size / 2.0;
    }

    pub fn set_bottom_left(&mut self, bottom_left: Vec2) {
        self.min = Vec2::new(bottom_left.x, bottom_left.y - self.size.y);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
    }

    /// Grow (or shrink, with negative amounts) around the same center
    pub fn inflate(&self, amount: Vec2) -> Self {
        Self::from_center(self.center(), self.size + amount)
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Bounds of a `size` box after rotating it by `degrees`
pub fn rotated_bounds(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(
        size.x * cos + size.y * sin,
        size.x * sin + size.y * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
        let c = Rect::new(Vec2::new(9.5, 9.5), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_inflate_keeps_center() {
        let r = Rect::from_center(Vec2::new(320.0, 184.0), Vec2::new(34.0, 24.0));
        let hit = r.inflate(Vec2::new(-6.0, -4.0));
        assert_eq!(hit.center(), r.center());
        assert_eq!(hit.size, Vec2::new(28.0, 20.0));
    }

    #[test]
    fn test_bottom_left() {
        let mut r = Rect::new(Vec2::ZERO, Vec2::new(52.0, 320.0));
        r.set_bottom_left(Vec2::new(780.0, 200.0));
        assert_eq!(r.left(), 780.0);
        assert_eq!(r.bottom(), 200.0);
        assert_eq!(r.top(), -120.0);
    }

    #[test]
    fn test_rotated_bounds() {
        let size = Vec2::new(34.0, 24.0);
        assert!((rotated_bounds(size, 0.0) - size).length() < 1e-4);
        let quarter = rotated_bounds(size, 90.0);
        assert!((quarter - Vec2::new(24.0, 34.0)).length() < 1e-3);
        assert!(rotated_bounds(size, 30.0).x > size.x);
    }
}
