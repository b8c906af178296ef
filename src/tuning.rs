//! Data-driven game balance
//!
//! Every gameplay constant lives here so the whole run is configured by one
//! value created at setup and passed into the constructors that need it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive integer range for uniform random draws (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRange {
    pub min: i32,
    pub max: i32,
}

impl DrawRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Flyer ===
    /// Base fall rate (px/s), restored at the start of every ascent
    pub gravity: f32,
    /// Fall acceleration (px/s²) on top of the base rate
    pub fall_acceleration: f32,
    /// Height of one ascent (px)
    pub max_climb: f32,
    /// Ascent duration (s)
    pub ascent_duration: f32,
    /// Re-ascent unlocks once the flyer falls this far below the apex (px)
    pub cooldown_margin: f32,
    /// Tilt angles (degrees, positive = nose up)
    pub nose_up: f32,
    pub nose_down: f32,
    /// Duration of the nose-up to nose-down tilt (s)
    pub tilt_duration: f32,
    /// Wing animation rate (frames/s before wrapping)
    pub anim_speed: f32,

    // === Obstacles ===
    /// Leftward scroll speed of obstacle pairs (px/s)
    pub pipe_speed: f32,
    /// Vertical opening between top and bottom pipe (px)
    pub pipe_gap: f32,
    /// Off-screen x the first pair is placed after
    pub spawn_anchor_x: f32,
    /// Horizontal distance between consecutive pairs
    pub spacing: DrawRange,
    /// Bottom edge of the top pipe
    pub opening: DrawRange,
    /// Bottom edge of the top pipe when a recycled pair re-enters at the
    /// viewport edge instead of trailing its predecessor: drawn from
    /// `catch_up_floor - pipe_gap ..= catch_up_max`
    pub catch_up_floor: i32,
    pub catch_up_max: i32,

    // === Scroll layers ===
    pub background_speed: f32,
    pub ground_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 200.0,
            fall_acceleration: 400.0,
            max_climb: 80.0,
            ascent_duration: 0.3,
            cooldown_margin: 5.0,
            nose_up: 30.0,
            nose_down: -30.0,
            tilt_duration: 0.2,
            anim_speed: 100.0,

            pipe_speed: 200.0,
            pipe_gap: 100.0,
            spawn_anchor_x: 580.0,
            spacing: DrawRange::new(200, 300),
            opening: DrawRange::new(129, 249),
            catch_up_floor: 200,
            catch_up_max: 205,

            background_speed: 50.0,
            ground_speed: 100.0,
        }
    }
}

impl Tuning {
    /// Catch-up opening range; its lower bound moves with the gap
    pub fn catch_up_opening(&self) -> DrawRange {
        DrawRange::new(self.catch_up_floor - self.pipe_gap as i32, self.catch_up_max)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipe_gap <= 0.0 {
            return Err(ConfigError::NonPositiveGap(self.pipe_gap));
        }

        let positives = [
            ("gravity", self.gravity),
            ("max_climb", self.max_climb),
            ("ascent_duration", self.ascent_duration),
            ("tilt_duration", self.tilt_duration),
            ("pipe_speed", self.pipe_speed),
            ("background_speed", self.background_speed),
            ("ground_speed", self.ground_speed),
        ];
        for (name, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.fall_acceleration < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "fall_acceleration",
                value: self.fall_acceleration,
            });
        }

        self.spacing.check("spacing")?;
        self.opening.check("opening")?;
        self.catch_up_opening().check("catch_up_opening")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_catch_up_range_follows_gap() {
        assert_eq!(Tuning::default().catch_up_opening(), DrawRange::new(100, 205));

        let tuning: Tuning = serde_json::from_str(r#"{ "pipe_gap": 120.0 }"#).unwrap();
        assert_eq!(tuning.catch_up_opening(), DrawRange::new(80, 205));

        let tuning = Tuning {
            pipe_gap: 10.0,
            catch_up_max: 150,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::EmptyRange { name: "catch_up_opening", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let tuning = Tuning {
            pipe_gap: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(ConfigError::NonPositiveGap(0.0)));

        let tuning = Tuning {
            pipe_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonPositive { name: "pipe_speed", .. })
        ));

        let tuning = Tuning {
            spacing: DrawRange::new(300, 200),
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::EmptyRange { name: "spacing", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "pipe_gap": 120.0 }"#).unwrap();
        assert_eq!(tuning.pipe_gap, 120.0);
        assert_eq!(tuning.pipe_speed, 200.0);
    }
}
