//! Error types
//!
//! Configuration errors are raised once at setup. Session errors come from the
//! persistence layer; the simulation tick itself never fails.

use thiserror::Error;

/// Invalid tuning or construction parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("flyer weight must be positive, got {0}")]
    NonPositiveWeight(f32),
    #[error("flyer fly speed must be positive, got {0}")]
    NonPositiveFlySpeed(f32),
    #[error("obstacle gap must be positive, got {0}")]
    NonPositiveGap(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("random range {name} is empty ({min}..={max})")]
    EmptyRange { name: &'static str, min: i32, max: i32 },
    #[error("unsupported frame rate {0} (expected 30 or 60)")]
    UnsupportedFrameRate(u32),
}

/// Failure reading or writing the session record
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session record is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
