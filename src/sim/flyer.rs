//! The player-controlled flyer
//!
//! Falls under gravity every tick. An ascent eases the center up by a fixed
//! climb; after it completes, re-ascent stays locked until the flyer has
//! fallen back past the apex by a small margin. The lock is a height
//! threshold, not a timer.

use glam::Vec2;

use super::ease::{Ease, EaseFn};
use super::rect::{Rect, rotated_bounds};
use crate::consts::{FLYER_FRAMES, FLYER_HITBOX_INSET, FLYER_SIZE};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Lives a fresh flyer starts with
pub const START_LIVES: u8 = 3;

/// Flight constants taken from [`Tuning`] at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParams {
    pub gravity: f32,
    pub fall_acceleration: f32,
    pub max_climb: f32,
    pub ascent_duration: f32,
    pub cooldown_margin: f32,
    pub nose_up: f32,
    pub nose_down: f32,
    pub tilt_duration: f32,
    pub anim_speed: f32,
}

impl From<&Tuning> for FlightParams {
    fn from(t: &Tuning) -> Self {
        Self {
            gravity: t.gravity,
            fall_acceleration: t.fall_acceleration,
            max_climb: t.max_climb,
            ascent_duration: t.ascent_duration,
            cooldown_margin: t.cooldown_margin,
            nose_up: t.nose_up,
            nose_down: t.nose_down,
            tilt_duration: t.tilt_duration,
            anim_speed: t.anim_speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    pub center: Vec2,
    /// Rotated sprite bounds, centered on `center`
    pub sprite: Rect,
    /// Collision box, inset from the unrotated sprite
    pub hitbox: Rect,
    pub weight: f32,
    pub fly_speed: f32,
    /// Downward speed (px/s)
    pub fall_velocity: f32,
    /// Tilt in degrees, positive = nose up
    pub rotation: f32,
    /// Current sprite frame
    pub frame: usize,
    pub lives: u8,
    params: FlightParams,
    anim: f32,
    ascent: Option<Ease>,
    ascent_target: f32,
    tilt: Option<Ease>,
    /// Re-ascent unlocks once `center.y` exceeds this
    cooldown_until: Option<f32>,
}

impl Flyer {
    pub fn new(
        params: FlightParams,
        weight: f32,
        fly_speed: f32,
        center: Vec2,
    ) -> Result<Self, ConfigError> {
        if weight <= 0.0 {
            return Err(ConfigError::NonPositiveWeight(weight));
        }
        if fly_speed <= 0.0 {
            return Err(ConfigError::NonPositiveFlySpeed(fly_speed));
        }

        let mut flyer = Self {
            center,
            sprite: Rect::from_center(center, FLYER_SIZE),
            hitbox: Rect::from_center(center, FLYER_SIZE - FLYER_HITBOX_INSET),
            weight,
            fly_speed,
            fall_velocity: params.gravity,
            rotation: params.nose_up,
            frame: 0,
            lives: START_LIVES,
            params,
            anim: 0.0,
            ascent: None,
            ascent_target: 0.0,
            tilt: None,
            cooldown_until: None,
        };
        flyer.reset_to(center);
        Ok(flyer)
    }

    /// Heavier flyers climb slower for the same fly speed
    pub fn ascent_rate(&self) -> f32 {
        self.fly_speed / self.weight
    }

    pub fn is_ascending(&self) -> bool {
        self.ascent.is_some()
    }

    /// True while a new ascent would be ignored
    pub fn is_locked(&self) -> bool {
        self.ascent.is_some() || self.cooldown_until.is_some()
    }

    pub fn cooldown_threshold(&self) -> Option<f32> {
        self.cooldown_until
    }

    pub fn ascent_target(&self) -> Option<f32> {
        self.ascent.as_ref().map(|_| self.ascent_target)
    }

    /// Place the flyer for a new or continued run, dropping any flight state
    pub fn reset_to(&mut self, center: Vec2) {
        self.center = center;
        self.fall_velocity = self.params.gravity;
        self.ascent = None;
        self.cooldown_until = None;
        self.anim = 0.0;
        self.frame = 0;
        self.rotation = self.params.nose_up;
        self.tilt = Some(self.fresh_tilt());
        self.refresh_geometry();
    }

    /// Start an ascent if not locked. Returns whether one began.
    pub fn try_ascend(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.ascent_target = self.center.y - self.params.max_climb;
        self.ascent = Some(Ease::new(
            self.center.y,
            self.ascent_target,
            self.params.ascent_duration,
            EaseFn::OutSine,
        ));
        self.tilt = Some(self.fresh_tilt());
        self.fall_velocity = self.params.gravity;
        true
    }

    /// Advance one tick. Returns true if an ascent started this tick.
    pub fn update(&mut self, dt: f32, ascend: bool) -> bool {
        self.apply_gravity(dt);

        let started = ascend && self.try_ascend();

        let mut finished = false;
        if let Some(ascent) = self.ascent.as_mut() {
            let (done, y) = ascent.advance(dt);
            self.center.y = y;
            finished = done;
            // Climbing overrides any tilt in progress
            self.rotation = self.params.nose_up;
            self.tilt = None;
        }

        if finished {
            self.ascent = None;
            self.cooldown_until = Some(self.ascent_target + self.params.cooldown_margin);
            self.tilt = Some(self.fresh_tilt());
            self.fall_velocity = self.params.gravity;
        }

        if let Some(threshold) = self.cooldown_until {
            if self.center.y > threshold {
                self.cooldown_until = None;
            }
        }

        if self.ascent.is_none() {
            if let Some(tilt) = self.tilt.as_mut() {
                let (done, angle) = tilt.advance(dt);
                self.rotation = angle;
                if done {
                    self.tilt = None;
                }
            }
        }

        self.apply_animation(dt);
        self.refresh_geometry();
        started
    }

    fn apply_gravity(&mut self, dt: f32) {
        self.fall_velocity += self.params.fall_acceleration * dt;
        self.center.y += self.fall_velocity * dt;
    }

    /// While climbing the wing frame tracks climb progress, otherwise it
    /// cycles at a constant rate. The last frame is never selected.
    fn apply_animation(&mut self, dt: f32) {
        let cycle = (FLYER_FRAMES - 1) as f32;
        if self.ascent.is_some() && self.ascent_target != 0.0 {
            self.anim = cycle * (self.center.y / self.ascent_target);
        } else {
            self.anim += self.params.anim_speed * dt;
        }
        self.anim = self.anim.rem_euclid(cycle);
        if self.anim >= cycle {
            self.anim = 0.0;
        }
        self.frame = (self.anim as usize).min(FLYER_FRAMES - 1);
    }

    fn refresh_geometry(&mut self) {
        self.sprite = Rect::from_center(self.center, rotated_bounds(FLYER_SIZE, self.rotation));
        self.hitbox.set_center(self.center);
    }

    fn fresh_tilt(&self) -> Ease {
        Ease::new(
            self.params.nose_up,
            self.params.nose_down,
            self.params.tilt_duration,
            EaseFn::OutSine,
        )
    }
}
