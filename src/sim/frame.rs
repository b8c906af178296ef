//! Render surface
//!
//! A plain snapshot of what to draw this tick. The host renderer blits these
//! boxes; nothing here touches pixels.

use super::obstacles::PAIR_COUNT;
use super::rect::Rect;
use super::state::{GameMode, GameState};
use crate::settings::FrameRate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyerSprite {
    /// Index into the wing animation frames
    pub frame: usize,
    /// Degrees, positive = nose up
    pub rotation: f32,
    /// Rotated sprite bounds
    pub bounds: Rect,
    pub hitbox: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSprites {
    pub top: Rect,
    pub bottom: Rect,
}

/// The in-game scene, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: [Rect; 2],
    pub flyer: FlyerSprite,
    pub pipes: [PipeSprites; PAIR_COUNT],
    pub ground: [Rect; 2],
    pub score: u32,
    pub lives: u8,
}

/// UI drawn over (or instead of) the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    Menu { continue_available: bool },
    Settings { frame_rate: FrameRate },
    About,
    /// "Press space to start", shown while the run is not advancing
    PressToStart,
    GameOver { high_score: Option<u32> },
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawFrame {
    pub scene: Option<Scene>,
    pub overlay: Overlay,
}

impl DrawFrame {
    pub fn capture(state: &GameState) -> Self {
        match state.mode {
            GameMode::Menu => Self {
                scene: None,
                overlay: Overlay::Menu {
                    continue_available: state.continue_available(),
                },
            },
            GameMode::Settings => Self {
                scene: None,
                overlay: Overlay::Settings {
                    frame_rate: state.settings.frame_rate,
                },
            },
            GameMode::About => Self {
                scene: None,
                overlay: Overlay::About,
            },
            GameMode::Playing(phase) => Self {
                scene: Some(scene(state)),
                overlay: if phase.is_suspended() {
                    Overlay::PressToStart
                } else {
                    Overlay::None
                },
            },
            GameMode::GameOver => Self {
                scene: Some(scene(state)),
                overlay: Overlay::GameOver {
                    high_score: state
                        .high_score
                        .is_set()
                        .then(|| state.high_score.best()),
                },
            },
        }
    }
}

fn scene(state: &GameState) -> Scene {
    let flyer = &state.flyer;
    Scene {
        background: state.background.tiles(),
        flyer: FlyerSprite {
            frame: flyer.frame,
            rotation: flyer.rotation,
            bounds: flyer.sprite,
            hitbox: flyer.hitbox,
        },
        pipes: state.obstacles.pairs.map(|p| PipeSprites {
            top: p.top,
            bottom: p.bottom,
        }),
        ground: state.ground.tiles(),
        score: state.score(),
        lives: flyer.lives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionRecord;
    use crate::sim::PlayPhase;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Tuning::default(), SessionRecord::default(), 3).unwrap()
    }

    #[test]
    fn test_menu_has_no_scene() {
        let mut state = state();
        state.record.continue_available = true;
        let frame = DrawFrame::capture(&state);
        assert!(frame.scene.is_none());
        assert_eq!(
            frame.overlay,
            Overlay::Menu {
                continue_available: true
            }
        );
    }

    #[test]
    fn test_ready_shows_start_overlay() {
        let mut state = state();
        state.set_mode(GameMode::Playing(PlayPhase::Ready));
        let frame = DrawFrame::capture(&state);
        assert_eq!(frame.overlay, Overlay::PressToStart);
        let scene = frame.scene.unwrap();
        assert_eq!(scene.flyer.hitbox, state.flyer.hitbox);
        assert_eq!(scene.pipes[1].top, state.obstacles.pairs[1].top);
        assert_eq!(scene.lives, 3);

        state.set_mode(GameMode::Playing(PlayPhase::Running));
        assert_eq!(DrawFrame::capture(&state).overlay, Overlay::None);
    }

    #[test]
    fn test_game_over_high_score_only_when_set() {
        let mut state = state();
        state.set_mode(GameMode::GameOver);
        assert_eq!(
            DrawFrame::capture(&state).overlay,
            Overlay::GameOver { high_score: None }
        );
        state.high_score.submit(8);
        assert_eq!(
            DrawFrame::capture(&state).overlay,
            Overlay::GameOver {
                high_score: Some(8)
            }
        );
    }
}
