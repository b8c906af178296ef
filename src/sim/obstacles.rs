//! Obstacle pairs: generation, scrolling, recycling, scoring and collision
//!
//! A fixed working set of [`PAIR_COUNT`] pairs scrolls left. A pair that
//! leaves the left edge is recycled ahead of the set instead of being
//! reallocated, so the set never changes size.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::PIPE_SIZE;
use crate::tuning::{DrawRange, Tuning};

/// Number of pairs in play at any time
pub const PAIR_COUNT: usize = 3;

/// A top and bottom pipe sharing one x coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Set once this pair has counted toward the score
    pub scored: bool,
}

impl Default for ObstaclePair {
    fn default() -> Self {
        Self {
            top: Rect::new(Vec2::ZERO, PIPE_SIZE),
            bottom: Rect::new(Vec2::ZERO, PIPE_SIZE),
            scored: false,
        }
    }
}

impl ObstaclePair {
    /// Put the pair at `x` with the top pipe's bottom edge at `opening_y`
    pub fn place(&mut self, x: f32, opening_y: f32, gap: f32) {
        self.top.set_bottom_left(Vec2::new(x, opening_y));
        self.bottom.min = Vec2::new(x, opening_y + gap);
        self.scored = false;
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.top.center().x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    /// Center strictly inside the horizontal viewport
    pub fn is_on_screen(&self, viewport_width: f32) -> bool {
        let cx = self.center_x();
        cx > 0.0 && cx < viewport_width
    }

    fn shift_x(&mut self, dx: f32) {
        self.top.translate(Vec2::new(dx, 0.0));
        self.bottom.translate(Vec2::new(dx, 0.0));
    }

    fn collides(&self, hitbox: &Rect) -> bool {
        self.top.intersects(hitbox) || self.bottom.intersects(hitbox)
    }
}

/// Owns the pairs, the score and the placement RNG
#[derive(Debug, Clone)]
pub struct ObstacleController {
    pub pairs: [ObstaclePair; PAIR_COUNT],
    pub score: u32,
    /// Last score a point cue was fired for
    pub previous_score: u32,
    speed: f32,
    gap: f32,
    spawn_anchor_x: f32,
    spacing: DrawRange,
    opening: DrawRange,
    catch_up_opening: DrawRange,
    viewport: Vec2,
    rng: Pcg32,
}

impl ObstacleController {
    pub fn new(tuning: &Tuning, viewport: Vec2, seed: u64) -> Self {
        let mut controller = Self {
            pairs: [ObstaclePair::default(); PAIR_COUNT],
            score: 0,
            previous_score: 0,
            speed: tuning.pipe_speed,
            gap: tuning.pipe_gap,
            spawn_anchor_x: tuning.spawn_anchor_x,
            spacing: tuning.spacing,
            opening: tuning.opening,
            catch_up_opening: tuning.catch_up_opening(),
            viewport,
            rng: Pcg32::seed_from_u64(seed),
        };
        controller.generate();
        controller
    }

    /// Horizontal line a pair's center must cross to score
    pub fn score_line(&self) -> f32 {
        self.viewport.x / 2.0
    }

    fn draw(&mut self, range: DrawRange) -> f32 {
        self.rng.random_range(range.min..=range.max) as f32
    }

    /// Lay out a fresh set of pairs to the right of the viewport
    pub fn generate(&mut self) {
        let mut x = self.spawn_anchor_x;
        for i in 0..PAIR_COUNT {
            x += self.draw(self.spacing);
            let opening_y = self.draw(self.opening);
            self.pairs[i].place(x, opening_y, self.gap);
        }
        log::debug!(
            "Generated obstacles at x = {:?}",
            self.pairs.map(|p| p.top.left())
        );
    }

    /// Zero the score for a new run
    pub fn reset_score(&mut self) {
        self.score = 0;
        self.previous_score = 0;
    }

    /// Scroll, recycle and score. Returns how many pairs scored this tick.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dx = -self.speed * dt;
        for pair in &mut self.pairs {
            pair.shift_x(dx);
        }

        for i in 0..PAIR_COUNT {
            if self.pairs[i].right() < 0.0 {
                self.recycle(i);
            }
        }

        let line = self.score_line();
        let mut scored = 0;
        for pair in &mut self.pairs {
            if !pair.scored && pair.center_x() < line {
                pair.scored = true;
                scored += 1;
            }
        }
        self.score += scored;
        scored
    }

    /// Move pair `i` ahead of the set. If its predecessor is still off the
    /// right edge, trail it; otherwise re-enter just past the right edge with
    /// the narrower catch-up opening range.
    fn recycle(&mut self, i: usize) {
        let prev = (i + PAIR_COUNT - 1) % PAIR_COUNT;
        let prev_right = self.pairs[prev].right();

        let (x, opening_y) = if prev_right > self.viewport.x {
            let x = prev_right + self.draw(self.spacing);
            (x, self.draw(self.opening))
        } else {
            let x = self.viewport.x + self.draw(self.spacing);
            (x, self.draw(self.catch_up_opening))
        };

        log::debug!("Recycled pair {} to x = {}", i, x);
        self.pairs[i].place(x, opening_y, self.gap);
    }

    /// Does the hitbox overlap any on-screen pipe?
    pub fn collides(&self, hitbox: &Rect) -> bool {
        self.pairs
            .iter()
            .filter(|pair| pair.is_on_screen(self.viewport.x))
            .any(|pair| pair.collides(hitbox))
    }

    /// Top-left corners of (top pipes, bottom pipes)
    pub fn top_lefts(&self) -> ([Vec2; PAIR_COUNT], [Vec2; PAIR_COUNT]) {
        (
            self.pairs.map(|p| p.top.min),
            self.pairs.map(|p| p.bottom.min),
        )
    }

    /// Put pairs back where a saved run left them. Pairs already past the
    /// score line count as scored so they are not counted twice.
    pub fn restore(&mut self, tops: &[Vec2; PAIR_COUNT], bottoms: &[Vec2; PAIR_COUNT]) {
        let line = self.score_line();
        for (pair, (top, bottom)) in self.pairs.iter_mut().zip(tops.iter().zip(bottoms)) {
            pair.top.min = *top;
            pair.bottom.min = *bottom;
            pair.scored = pair.center_x() < line;
        }
    }
}
