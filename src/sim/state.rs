//! Game state owned by the mode controller
//!
//! Everything a tick touches lives here: the current mode, the flyer, the
//! obstacle set, both scroll layers and the session record used for
//! "continue".

use super::flyer::{FlightParams, Flyer};
use super::obstacles::ObstacleController;
use super::scroll::ScrollLayer;
use crate::consts::*;
use crate::error::ConfigError;
use crate::highscores::HighScore;
use crate::session::{EntityRecord, OtherEntityRecord, PipesRecord, SessionRecord};
use crate::settings::Settings;
use crate::tuning::Tuning;
use crate::viewport;

/// Sub-state of an active game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPhase {
    /// Scene shown with the start overlay, waiting for the first flap
    Ready,
    /// Simulation advancing
    Running,
    /// Frozen by the pause toggle, start overlay shown
    Paused,
}

impl PlayPhase {
    /// Ready and Paused both render the static "press to start" overlay
    pub fn is_suspended(&self) -> bool {
        !matches!(self, PlayPhase::Running)
    }
}

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Settings,
    About,
    Playing(PlayPhase),
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    pub tuning: Tuning,
    pub flyer: Flyer,
    pub obstacles: ObstacleController,
    pub background: ScrollLayer,
    pub ground: ScrollLayer,
    pub high_score: HighScore,
    pub settings: Settings,
    /// Last saved run plus persisted preferences
    pub record: SessionRecord,
}

impl GameState {
    /// Build the game from tuning and a loaded record. Invalid tuning or
    /// flyer parameters fail here, never mid-run.
    pub fn new(tuning: Tuning, record: SessionRecord, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let flyer = Flyer::new(
            FlightParams::from(&tuning),
            record.entity.weight,
            record.entity.fly_speed,
            FLYER_START,
        )?;
        let obstacles = ObstacleController::new(&tuning, viewport(), seed);
        let background = ScrollLayer::new(BACKGROUND_SIZE, BACKGROUND_ORIGIN, viewport());
        let ground = ScrollLayer::new(GROUND_SIZE, GROUND_ORIGIN, viewport());

        Ok(Self {
            mode: GameMode::Menu,
            tuning,
            flyer,
            obstacles,
            background,
            ground,
            high_score: HighScore::new(record.highscore),
            settings: Settings {
                frame_rate: record.fps,
            },
            record,
        })
    }

    pub fn score(&self) -> u32 {
        self.obstacles.score
    }

    pub fn continue_available(&self) -> bool {
        self.record.continue_available
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::info!("Mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Fresh obstacles, zero score, flyer back at the start point
    pub fn reset_run(&mut self) {
        self.obstacles.generate();
        self.obstacles.reset_score();
        self.flyer.reset_to(FLYER_START);
    }

    /// Write the current run into the record and mark it resumable
    pub fn capture_run(&mut self) {
        let (tops, bottoms) = self.obstacles.top_lefts();
        self.record.entity = EntityRecord {
            weight: self.flyer.weight,
            fly_speed: self.flyer.fly_speed,
            pos: self.flyer.center,
        };
        self.record.pipes_pos = PipesRecord {
            toppipe_list: tops,
            bottompipe_list: bottoms,
        };
        self.record.other_entity = OtherEntityRecord {
            base_pos: self.ground.positions().into(),
            background_pos: self.background.positions().into(),
        };
        self.record.score = self.obstacles.score;
        self.record.previous_score = self.obstacles.previous_score;
        self.record.continue_available = true;
        log::info!("Run captured (score {})", self.record.score);
    }

    /// Rebuild the run from the record
    pub fn restore_run(&mut self) {
        let record = &self.record;
        self.flyer.reset_to(record.entity.pos);
        self.obstacles.restore(
            &record.pipes_pos.toppipe_list,
            &record.pipes_pos.bottompipe_list,
        );
        self.ground.restore(record.other_entity.base_pos.into());
        self.background
            .restore(record.other_entity.background_pos.into());
        self.obstacles.score = record.score;
        self.obstacles.previous_score = record.previous_score;
        log::info!("Run restored (score {})", record.score);
    }

    /// Abandon the saved run
    pub fn clear_continue(&mut self) {
        self.record.continue_available = false;
    }

    /// The record as it should be written now
    pub fn snapshot(&self) -> SessionRecord {
        let mut record = self.record.clone();
        record.highscore = self.high_score.best();
        record.fps = self.settings.frame_rate;
        record
    }

    /// Record to write on exit. A run still in progress is captured first so
    /// it can be continued next session.
    pub fn shutdown_record(&mut self) -> SessionRecord {
        if matches!(self.mode, GameMode::Playing(_)) {
            self.capture_run();
        }
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FrameRate;
    use crate::sim::ScrollDirection;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(Tuning::default(), SessionRecord::default(), 42).unwrap()
    }

    #[test]
    fn test_new_starts_in_menu() {
        let state = state();
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.score(), 0);
        assert_eq!(state.flyer.center, FLYER_START);
        assert!(!state.continue_available());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let mut record = SessionRecord::default();
        record.entity.weight = 0.0;
        assert_eq!(
            GameState::new(Tuning::default(), record, 1).err(),
            Some(ConfigError::NonPositiveWeight(0.0))
        );

        let tuning = Tuning {
            pipe_gap: -5.0,
            ..Default::default()
        };
        assert!(GameState::new(tuning, SessionRecord::default(), 1).is_err());
    }

    #[test]
    fn test_capture_then_restore_reproduces_run() {
        let mut state = state();
        state.flyer.reset_to(Vec2::new(320.0, 222.5));
        state.obstacles.update(1.3);
        state.obstacles.score = 3;
        state.obstacles.previous_score = 3;
        for _ in 0..30 {
            state.background.advance(50.0, 0.1, ScrollDirection::Left);
            state.ground.advance(100.0, 0.1, ScrollDirection::Left);
        }
        state.capture_run();
        let pairs = state.obstacles.pairs;
        let tiles = (state.ground.tiles(), state.background.tiles());

        state.reset_run();
        assert_eq!(state.score(), 0);
        state.restore_run();

        assert_eq!(state.flyer.center, Vec2::new(320.0, 222.5));
        assert_eq!(state.score(), 3);
        assert_eq!(state.obstacles.previous_score, 3);
        for (restored, saved) in state.obstacles.pairs.iter().zip(&pairs) {
            assert_eq!(restored.top, saved.top);
            assert_eq!(restored.bottom, saved.bottom);
        }
        assert_eq!((state.ground.tiles(), state.background.tiles()), tiles);
    }

    #[test]
    fn test_snapshot_carries_preferences() {
        let mut state = state();
        state.high_score.submit(9);
        state.settings.set_frame_rate(FrameRate::Thirty);
        let record = state.snapshot();
        assert_eq!(record.highscore, 9);
        assert_eq!(record.fps, FrameRate::Thirty);
    }

    #[test]
    fn test_shutdown_mid_run_keeps_it_resumable() {
        let mut playing = state();
        playing.set_mode(GameMode::Playing(PlayPhase::Running));
        assert!(playing.shutdown_record().continue_available);

        let mut menu = state();
        assert!(!menu.shutdown_record().continue_available);
    }
}
