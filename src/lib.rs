//! Flappy - a side-scrolling arcade flyer
//!
//! Core modules:
//! - `sim`: Simulation (flyer physics, obstacles, scroll layers, game modes)
//! - `session`: Persisted session record used for "continue"
//! - `persistence`: JSON load/save of the session record
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound cues emitted by the simulation

pub mod audio;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, SessionError};
pub use highscores::HighScore;
pub use session::SessionRecord;
pub use settings::{FrameRate, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Flyer sprite frame size and frame count
    pub const FLYER_SIZE: Vec2 = Vec2::new(34.0, 24.0);
    pub const FLYER_FRAMES: usize = 3;
    /// Collision box is the sprite box shrunk by this much (forgives near-misses)
    pub const FLYER_HITBOX_INSET: Vec2 = Vec2::new(6.0, 4.0);
    /// Where a fresh run places the flyer's center
    pub const FLYER_START: Vec2 = Vec2::new(320.0, 184.0);

    /// Obstacle sprite size (one pipe)
    pub const PIPE_SIZE: Vec2 = Vec2::new(52.0, 320.0);

    /// Background covers the whole viewport
    pub const BACKGROUND_SIZE: Vec2 = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    pub const BACKGROUND_ORIGIN: Vec2 = Vec2::ZERO;
    /// Ground strip along the bottom edge
    pub const GROUND_SIZE: Vec2 = Vec2::new(640.0, 112.0);
    pub const GROUND_ORIGIN: Vec2 = Vec2::new(0.0, 368.0);
}

/// Viewport as a vector
#[inline]
pub fn viewport() -> glam::Vec2 {
    glam::Vec2::new(consts::VIEWPORT_WIDTH, consts::VIEWPORT_HEIGHT)
}
