//! Two-tile wraparound scrolling for background and ground layers
//!
//! Two copies of the same tile scroll together. The front tile moves; the back
//! tile is kept flush against the front tile's trailing side. When the front
//! tile has fully left the viewport the roles swap by flipping a flag.

use glam::Vec2;

use super::rect::Rect;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ScrollDirection {
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            ScrollDirection::Left => Vec2::new(-1.0, 0.0),
            ScrollDirection::Right => Vec2::new(1.0, 0.0),
            ScrollDirection::Up => Vec2::new(0.0, -1.0),
            ScrollDirection::Down => Vec2::new(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLayer {
    tiles: [Rect; 2],
    /// Which slot is currently the front tile
    front_is_a: bool,
    viewport: Vec2,
}

impl ScrollLayer {
    /// Both tiles start stacked at `origin`; the first advance spreads them
    pub fn new(tile_size: Vec2, origin: Vec2, viewport: Vec2) -> Self {
        Self {
            tiles: [Rect::new(origin, tile_size); 2],
            front_is_a: true,
            viewport,
        }
    }

    #[inline]
    fn slots(&self) -> (usize, usize) {
        if self.front_is_a { (0, 1) } else { (1, 0) }
    }

    pub fn front(&self) -> &Rect {
        &self.tiles[self.slots().0]
    }

    pub fn back(&self) -> &Rect {
        &self.tiles[self.slots().1]
    }

    /// Tiles in draw order, front first
    pub fn tiles(&self) -> [Rect; 2] {
        [*self.front(), *self.back()]
    }

    fn has_exited(&self, tile: &Rect, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => tile.right() <= 0.0,
            ScrollDirection::Right => tile.left() >= self.viewport.x,
            ScrollDirection::Up => tile.bottom() <= 0.0,
            ScrollDirection::Down => tile.top() >= self.viewport.y,
        }
    }

    /// Place the back tile on the side the front tile is moving away from
    fn align_back(&mut self, direction: ScrollDirection) {
        let (front_slot, back_slot) = self.slots();
        let front = self.tiles[front_slot];
        let back = &mut self.tiles[back_slot];
        back.min = match direction {
            ScrollDirection::Left => Vec2::new(front.right(), front.top()),
            ScrollDirection::Right => Vec2::new(front.left() - back.size.x, front.top()),
            ScrollDirection::Up => Vec2::new(front.left(), front.bottom()),
            ScrollDirection::Down => Vec2::new(front.left(), front.top() - back.size.y),
        };
    }

    pub fn advance(&mut self, speed: f32, dt: f32, direction: ScrollDirection) {
        let (front_slot, _) = self.slots();
        self.tiles[front_slot].translate(direction.unit() * speed * dt);
        self.align_back(direction);

        if self.has_exited(self.front(), direction) {
            self.front_is_a = !self.front_is_a;
            self.align_back(direction);
        }
    }

    pub fn collides(&self, hitbox: &Rect) -> bool {
        self.tiles.iter().any(|tile| tile.intersects(hitbox))
    }

    /// Top-left corners, front first
    pub fn positions(&self) -> [Vec2; 2] {
        self.tiles().map(|t| t.min)
    }

    /// Put tiles back at saved positions (front first)
    pub fn restore(&mut self, positions: [Vec2; 2]) {
        self.front_is_a = true;
        self.tiles[0].min = positions[0];
        self.tiles[1].min = positions[1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::viewport;
    use proptest::prelude::*;

    fn ground() -> ScrollLayer {
        ScrollLayer::new(GROUND_SIZE, GROUND_ORIGIN, viewport())
    }

    #[test]
    fn test_back_tile_is_flush_after_first_advance() {
        let mut layer = ground();
        layer.advance(100.0, 0.1, ScrollDirection::Left);
        assert_eq!(layer.front().left(), -10.0);
        assert_eq!(layer.back().left(), layer.front().right());
        assert_eq!(layer.back().top(), 368.0);
    }

    #[test]
    fn test_swaps_when_front_leaves() {
        let mut layer = ground();
        let first_front = *layer.front();
        // 640 px at 100 px/s with 0.5 s steps
        for _ in 0..13 {
            layer.advance(100.0, 0.5, ScrollDirection::Left);
        }
        assert_ne!(layer.front().min, first_front.min);
        assert!(layer.front().left() <= 0.0);
        assert!(layer.front().right() > 0.0);
        assert_eq!(layer.back().left(), layer.front().right());
    }

    #[test]
    fn test_vertical_scroll() {
        let mut layer = ScrollLayer::new(BACKGROUND_SIZE, Vec2::ZERO, viewport());
        layer.advance(50.0, 1.0, ScrollDirection::Down);
        assert_eq!(layer.front().top(), 50.0);
        assert_eq!(layer.back().bottom(), 50.0);
    }

    #[test]
    fn test_collides_with_either_tile() {
        let mut layer = ground();
        layer.advance(100.0, 3.0, ScrollDirection::Left); // front at -300
        let on_back = Rect::from_center(Vec2::new(500.0, 370.0), Vec2::new(28.0, 20.0));
        assert!(layer.back().intersects(&on_back));
        assert!(layer.collides(&on_back));
        let above = Rect::from_center(Vec2::new(500.0, 300.0), Vec2::new(28.0, 20.0));
        assert!(!layer.collides(&above));
    }

    #[test]
    fn test_positions_round_trip() {
        let mut layer = ground();
        for _ in 0..20 {
            layer.advance(100.0, 0.37, ScrollDirection::Left);
        }
        let saved = layer.positions();
        let mut restored = ground();
        restored.restore(saved);
        assert_eq!(restored.tiles(), layer.tiles());
    }

    fn covers_viewport(layer: &ScrollLayer, direction: ScrollDirection) -> bool {
        let tiles = layer.tiles();
        let lo = tiles.iter().map(|t| t.min).fold(Vec2::splat(f32::MAX), Vec2::min);
        let hi = tiles
            .iter()
            .map(|t| t.min + t.size)
            .fold(Vec2::splat(f32::MIN), Vec2::max);
        match direction {
            ScrollDirection::Left | ScrollDirection::Right => lo.x <= 0.0 && hi.x >= 640.0,
            ScrollDirection::Up | ScrollDirection::Down => lo.y <= 0.0 && hi.y >= 480.0,
        }
    }

    proptest! {
        #[test]
        fn prop_tiles_cover_viewport(
            dts in proptest::collection::vec(0.001f32..0.2, 1..300),
            speed in 10.0f32..400.0,
            dir in prop_oneof![
                Just(ScrollDirection::Left),
                Just(ScrollDirection::Right),
                Just(ScrollDirection::Up),
                Just(ScrollDirection::Down),
            ],
        ) {
            let mut layer = ScrollLayer::new(BACKGROUND_SIZE, Vec2::ZERO, viewport());
            for dt in dts {
                layer.advance(speed, dt, dir);
                prop_assert!(covers_viewport(&layer, dir));
                // Tiles stay contiguous
                let (front, back) = (*layer.front(), *layer.back());
                let gap = match dir {
                    ScrollDirection::Left => back.left() - front.right(),
                    ScrollDirection::Right => front.left() - back.right(),
                    ScrollDirection::Up => back.top() - front.bottom(),
                    ScrollDirection::Down => front.top() - back.bottom(),
                };
                prop_assert!(gap.abs() < 1e-3);
            }
        }
    }
}
