//! Persisted session record
//!
//! The on-disk shape of a saved run, the high score and the frame rate. Keys
//! match the game's data file exactly; keys this crate does not know about
//! (asset tables and the like) are carried through load/save untouched.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{BACKGROUND_ORIGIN, FLYER_START, GROUND_ORIGIN};
use crate::settings::FrameRate;
use crate::sim::obstacles::PAIR_COUNT;

/// Flyer parameters and last center position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub weight: f32,
    pub fly_speed: f32,
    pub pos: Vec2,
}

/// Top-left corners of every obstacle, by pair index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipesRecord {
    pub toppipe_list: [Vec2; PAIR_COUNT],
    pub bottompipe_list: [Vec2; PAIR_COUNT],
}

/// Top-left corners of a scroll layer's tiles; `img1` is the front tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilePositions {
    pub img1: Vec2,
    pub img2: Vec2,
}

impl TilePositions {
    pub fn stacked(origin: Vec2) -> Self {
        Self {
            img1: origin,
            img2: origin,
        }
    }
}

impl From<[Vec2; 2]> for TilePositions {
    fn from([img1, img2]: [Vec2; 2]) -> Self {
        Self { img1, img2 }
    }
}

impl From<TilePositions> for [Vec2; 2] {
    fn from(t: TilePositions) -> Self {
        [t.img1, t.img2]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherEntityRecord {
    pub base_pos: TilePositions,
    pub background_pos: TilePositions,
}

/// Everything that survives between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub entity: EntityRecord,
    pub pipes_pos: PipesRecord,
    pub other_entity: OtherEntityRecord,
    /// A run was left mid-game and can be resumed. The run fields above are
    /// only meaningful while this is set.
    #[serde(rename = "continue")]
    pub continue_available: bool,
    pub score: u32,
    pub previous_score: u32,
    pub highscore: u32,
    pub fps: FrameRate,
    /// Unrecognized keys, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            entity: EntityRecord {
                weight: 1.0,
                fly_speed: 200.0,
                pos: FLYER_START,
            },
            pipes_pos: PipesRecord {
                toppipe_list: [Vec2::ZERO; PAIR_COUNT],
                bottompipe_list: [Vec2::ZERO; PAIR_COUNT],
            },
            other_entity: OtherEntityRecord {
                base_pos: TilePositions::stacked(GROUND_ORIGIN),
                background_pos: TilePositions::stacked(BACKGROUND_ORIGIN),
            },
            continue_available: false,
            score: 0,
            previous_score: 0,
            highscore: 0,
            fps: FrameRate::Sixty,
            extra: Map::new(),
        }
    }
}

impl SessionRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_FILE: &str = r#"{
        "yellowbird": ["assert/sprites/yellowbird-upflap.png"],
        "entity": {"weight": 2, "fly_speed": 400, "pos": [320, 184]},
        "pipes_pos": {
            "toppipe_list": [[800, -150], [1050, -120], [1320, -190]],
            "bottompipe_list": [[800, 270], [1050, 300], [1320, 230]]
        },
        "other_entity": {
            "base_pos": {"img1": [-40, 368], "img2": [600, 368]},
            "background_pos": {"img1": [-20, 0], "img2": [620, 0]}
        },
        "continue": true,
        "score": 4,
        "previous_score": 4,
        "highscore": 12,
        "fps": 30
    }"#;

    #[test]
    fn test_parses_data_file() {
        let record = SessionRecord::from_json(DATA_FILE).unwrap();
        assert_eq!(record.entity.weight, 2.0);
        assert_eq!(record.entity.pos, Vec2::new(320.0, 184.0));
        assert_eq!(record.pipes_pos.toppipe_list[1], Vec2::new(1050.0, -120.0));
        assert_eq!(record.other_entity.base_pos.img2, Vec2::new(600.0, 368.0));
        assert!(record.continue_available);
        assert_eq!(record.fps, FrameRate::Thirty);
        assert!(record.extra.contains_key("yellowbird"));
    }

    #[test]
    fn test_round_trip_keeps_unknown_keys() {
        let record = SessionRecord::from_json(DATA_FILE).unwrap();
        let json = record.to_json().unwrap();
        assert!(json.contains("\"continue\": true"));
        assert!(json.contains("yellowbird"));
        let again = SessionRecord::from_json(&json).unwrap();
        assert_eq!(again, record);
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(SessionRecord::from_json(r#"{"score": 1}"#).is_err());
    }
}
