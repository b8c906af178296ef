//! Per-tick game-mode state machine
//!
//! `tick` is the only entry point into the simulation. The delta-time it is
//! handed is the only clock; nothing here reads wall time.

use super::scroll::ScrollDirection;
use super::state::{GameMode, GameState, PlayPhase};
use crate::audio::SoundEffect;
use crate::settings::FrameRate;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewGame,
    Continue,
    Settings,
    About,
}

/// Input for a single tick. Every flag is true only on the tick its key was
/// pressed.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (space)
    pub ascend: bool,
    /// Pause toggle (p)
    pub pause: bool,
    /// Restart after game over (r)
    pub restart: bool,
    /// Back to the previous screen (x)
    pub back: bool,
    /// Menu button pressed
    pub menu: Option<MenuAction>,
    /// Frame rate button pressed on the settings screen
    pub select_fps: Option<FrameRate>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    /// Cues to play, in firing order
    pub sounds: Vec<SoundEffect>,
    /// Pairs scored this tick
    pub scored: u32,
    /// The run just ended with a new best score
    pub new_high_score: bool,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutput {
    let mut out = TickOutput::default();

    match state.mode {
        GameMode::Menu => tick_menu(state, input),
        GameMode::Settings => {
            if let Some(rate) = input.select_fps {
                state.settings.set_frame_rate(rate);
                state.record.fps = state.settings.frame_rate;
            }
            if input.back {
                state.set_mode(GameMode::Menu);
            }
        }
        GameMode::About => {
            if input.back {
                state.set_mode(GameMode::Menu);
            }
        }
        GameMode::Playing(phase) => tick_playing(state, phase, input, dt, &mut out),
        GameMode::GameOver => {
            if input.back {
                state.reset_run();
                state.clear_continue();
                state.set_mode(GameMode::Menu);
            } else if input.restart {
                state.reset_run();
                state.set_mode(GameMode::Playing(PlayPhase::Ready));
            }
        }
    }

    out
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    match input.menu {
        Some(MenuAction::NewGame) => {
            state.reset_run();
            state.set_mode(GameMode::Playing(PlayPhase::Ready));
        }
        Some(MenuAction::Continue) => {
            if state.continue_available() {
                state.restore_run();
                state.set_mode(GameMode::Playing(PlayPhase::Ready));
            } else {
                log::debug!("Continue selected with no saved run, ignoring");
            }
        }
        Some(MenuAction::Settings) => state.set_mode(GameMode::Settings),
        Some(MenuAction::About) => state.set_mode(GameMode::About),
        None => {}
    }
}

fn tick_playing(
    state: &mut GameState,
    phase: PlayPhase,
    input: &TickInput,
    dt: f32,
    out: &mut TickOutput,
) {
    // Leaving mid-run saves it for "continue"
    if input.back {
        state.capture_run();
        state.reset_run();
        state.set_mode(GameMode::Menu);
        return;
    }

    match phase {
        PlayPhase::Running if input.pause => {
            state.set_mode(GameMode::Playing(PlayPhase::Paused));
            return;
        }
        PlayPhase::Ready | PlayPhase::Paused => {
            if !(input.ascend || input.pause) {
                return;
            }
            state.set_mode(GameMode::Playing(PlayPhase::Running));
        }
        PlayPhase::Running => {}
    }

    let tuning = &state.tuning;
    state
        .background
        .advance(tuning.background_speed, dt, ScrollDirection::Left);
    if state.flyer.update(dt, input.ascend) {
        out.sounds.push(SoundEffect::Wing);
    }
    out.scored = state.obstacles.update(dt);
    state
        .ground
        .advance(tuning.ground_speed, dt, ScrollDirection::Left);

    let hitbox = state.flyer.hitbox;
    if state.obstacles.collides(&hitbox) || state.ground.collides(&hitbox) {
        out.sounds.push(SoundEffect::Hit);
        out.sounds.push(SoundEffect::Die);
        out.new_high_score = state.high_score.submit(state.obstacles.score);
        state.set_mode(GameMode::GameOver);
    }

    let obstacles = &mut state.obstacles;
    if obstacles.score > obstacles.previous_score {
        out.sounds.push(SoundEffect::Point);
        obstacles.previous_score = obstacles.score;
    }
}
