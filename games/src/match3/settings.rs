use common::Validate;
use serde::{Deserialize, Serialize};

use super::types::TileKind;

pub const BOARD_ROWS: usize = 8;
pub const BOARD_COLS: usize = 8;
pub const MIN_MATCH_SIZE: usize = 3;
pub const TILE_KIND_COUNT: usize = TileKind::ALL.len();
pub const POINTS_PER_TILE: u32 = 10;
pub const COMBO_MULTIPLIER: f64 = 1.5;

const MIN_BOARD_SIDE: usize = 4;
const MAX_BOARD_SIDE: usize = 12;
// Below four kinds the generator's resampling has too little room and
// boards degenerate into constant cascades.
const MIN_TILE_KINDS: usize = 4;
const MAX_COMBO_MULTIPLIER: f64 = 4.0;

/// Tunable parameters of one match-3 session. `move_limit` and
/// `target_score` are either both zero (endless play, the app default) or
/// both set (challenge mode: reach the target before the moves run out).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match3Settings {
    pub rows: usize,
    pub cols: usize,
    pub tile_kinds: usize,
    pub points_per_tile: u32,
    pub combo_multiplier: f64,
    pub move_limit: u32,
    pub target_score: u32,
}

impl Default for Match3Settings {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            tile_kinds: TILE_KIND_COUNT,
            points_per_tile: POINTS_PER_TILE,
            combo_multiplier: COMBO_MULTIPLIER,
            move_limit: 0,
            target_score: 0,
        }
    }
}

impl Validate for Match3Settings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&self.rows) {
            return Err(format!(
                "Board rows must be between {} and {}, got {}",
                MIN_BOARD_SIDE, MAX_BOARD_SIDE, self.rows
            ));
        }
        if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&self.cols) {
            return Err(format!(
                "Board cols must be between {} and {}, got {}",
                MIN_BOARD_SIDE, MAX_BOARD_SIDE, self.cols
            ));
        }
        if !(MIN_TILE_KINDS..=TILE_KIND_COUNT).contains(&self.tile_kinds) {
            return Err(format!(
                "Tile kinds must be between {} and {}, got {}",
                MIN_TILE_KINDS, TILE_KIND_COUNT, self.tile_kinds
            ));
        }
        if self.points_per_tile == 0 {
            return Err("Points per tile must be positive".to_string());
        }
        if !(1.0..=MAX_COMBO_MULTIPLIER).contains(&self.combo_multiplier) {
            return Err(format!(
                "Combo multiplier must be between 1.0 and {}, got {}",
                MAX_COMBO_MULTIPLIER, self.combo_multiplier
            ));
        }
        if (self.move_limit == 0) != (self.target_score == 0) {
            return Err(
                "Move limit and target score must be set together (or both zero for endless play)"
                    .to_string(),
            );
        }
        Ok(())
    }
}
