//! Flappy headless entry point
//!
//! Loads the session record, plays one run with a simple autopilot at the
//! configured frame rate, then writes the record back. Window, input polling
//! and rendering belong to a host front end; this binary exercises the core.
//!
//! Usage: `flappy [DATA_FILE] [TICKS] [SEED]`

use std::path::PathBuf;
use std::process::ExitCode;

use flappy::audio::{AudioSink, LogAudio};
use flappy::persistence::{self, DATA_FILENAME};
use flappy::sim::{DrawFrame, GameMode, GameState, MenuAction, TickInput, tick};
use flappy::{ConfigError, SessionError, Tuning};

/// Anything that stops the headless run
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Flap when the flyer sinks this far below the middle of the next gap
const AUTOPILOT_SLACK: f32 = 12.0;

/// Pick this tick's input: flap to stay near the center of the next opening
fn autopilot(state: &GameState) -> TickInput {
    let flyer = &state.flyer;
    let target_y = state
        .obstacles
        .pairs
        .iter()
        .filter(|p| p.top.right() > flyer.hitbox.left())
        .min_by(|a, b| a.top.left().total_cmp(&b.top.left()))
        .map(|p| (p.top.bottom() + p.bottom.top()) / 2.0)
        .unwrap_or(flappy::consts::FLYER_START.y);

    TickInput {
        ascend: flyer.center.y > target_y + AUTOPILOT_SLACK,
        ..Default::default()
    }
}

fn run(path: PathBuf, ticks: u32, seed: u64) -> Result<(), RunError> {
    let record = persistence::load_or_default(&path)?;
    let mut state = GameState::new(Tuning::default(), record, seed)?;
    let dt = state.settings.frame_rate.frame_dt();
    let mut audio = LogAudio::default();

    let action = if state.continue_available() {
        MenuAction::Continue
    } else {
        MenuAction::NewGame
    };
    log::info!("Starting run ({:?}, {} fps)", action, state.settings.frame_rate.fps());
    tick(
        &mut state,
        &TickInput {
            menu: Some(action),
            ..Default::default()
        },
        dt,
    );

    for n in 0..ticks {
        let input = autopilot(&state);
        let out = tick(&mut state, &input, dt);
        audio.play_all(&out.sounds);

        if state.mode == GameMode::GameOver {
            log::info!("Run ended after {} ticks", n + 1);
            break;
        }
    }

    if let Some(scene) = DrawFrame::capture(&state).scene {
        log::info!(
            "Score {} | flyer at ({:.1}, {:.1}) | {} cues played",
            scene.score,
            scene.flyer.bounds.center().x,
            scene.flyer.bounds.center().y,
            audio.played
        );
    }

    let record = state.shutdown_record();
    persistence::save(&path, &record)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy (headless) starting...");

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_FILENAME));
    let ticks = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    match run(path, ticks, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
