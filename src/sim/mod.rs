//! Simulation module
//!
//! All gameplay logic lives here:
//! - Delta-time supplied by the caller is the only clock
//! - Seeded RNG only
//! - No rendering, audio or file I/O

pub mod ease;
pub mod flyer;
pub mod frame;
pub mod obstacles;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use ease::{Ease, EaseFn};
pub use flyer::{FlightParams, Flyer};
pub use frame::{DrawFrame, Overlay, Scene};
pub use obstacles::{ObstacleController, ObstaclePair, PAIR_COUNT};
pub use rect::Rect;
pub use scroll::{ScrollDirection, ScrollLayer};
pub use state::{GameMode, GameState, PlayPhase};
pub use tick::{MenuAction, TickInput, TickOutput, tick};
