//! Game settings and preferences
//!
//! The only user-facing setting is the target frame rate, stored in the
//! session record's `fps` field.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Target frame rate the run loop throttles to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum FrameRate {
    Thirty,
    #[default]
    Sixty,
}

impl FrameRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameRate::Thirty => "30 FPS",
            FrameRate::Sixty => "60 FPS",
        }
    }

    pub fn fps(&self) -> u32 {
        match self {
            FrameRate::Thirty => 30,
            FrameRate::Sixty => 60,
        }
    }

    /// Nominal delta-time per tick at this rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps() as f32
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = ConfigError;

    fn try_from(fps: u32) -> Result<Self, Self::Error> {
        match fps {
            30 => Ok(FrameRate::Thirty),
            60 => Ok(FrameRate::Sixty),
            other => Err(ConfigError::UnsupportedFrameRate(other)),
        }
    }
}

impl From<FrameRate> for u32 {
    fn from(rate: FrameRate) -> Self {
        rate.fps()
    }
}

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub frame_rate: FrameRate,
}

impl Settings {
    /// Switch frame rate; returns true when it actually changed
    pub fn set_frame_rate(&mut self, rate: FrameRate) -> bool {
        if self.frame_rate == rate {
            return false;
        }
        log::info!("Frame rate set to {}", rate.as_str());
        self.frame_rate = rate;
        true
    }
}
