//! Time-parameterized easing between two scalar values
//!
//! An [`Ease`] handle is advanced with the tick's delta-time and reports
//! `(done, value)`. Once done it has delivered the end value and should be
//! dropped by the caller.

use std::f32::consts::{FRAC_PI_2, PI};

/// Named easing curves. Each maps progress `t` in [0, 1] to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseFn {
    Linear,
    InSine,
    /// Fast start, smooth deceleration
    OutSine,
    InOutSine,
    OutQuad,
}

impl EaseFn {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            EaseFn::Linear => t,
            EaseFn::InSine => 1.0 - (t * FRAC_PI_2).cos(),
            EaseFn::OutSine => (t * FRAC_PI_2).sin(),
            EaseFn::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            EaseFn::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Stateful interpolation handle
#[derive(Debug, Clone, PartialEq)]
pub struct Ease {
    pub start: f32,
    pub end: f32,
    pub duration: f32,
    pub curve: EaseFn,
    elapsed: f32,
}

impl Ease {
    pub fn new(start: f32, end: f32, duration: f32, curve: EaseFn) -> Self {
        Self {
            start,
            end,
            duration,
            curve,
            elapsed: 0.0,
        }
    }

    /// Time accumulated so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `dt` seconds and return `(done, value)`
    pub fn advance(&mut self, dt: f32) -> (bool, f32) {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            // Exact end value, independent of curve rounding
            return (true, self.end);
        }

        let t = self.curve.apply(self.elapsed / self.duration);
        (false, self.start + t * (self.end - self.start))
    }
}
