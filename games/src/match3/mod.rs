mod board;
mod game_state;
mod matching;
mod replay;
mod scoring;
mod settings;
mod types;

pub use board::Board;
pub use game_state::Match3GameState;
pub use matching::union_positions;
pub use replay::{Match3Replay, RecordedMove};
pub use scoring::calculate_score;
pub use settings::{
    BOARD_COLS, BOARD_ROWS, COMBO_MULTIPLIER, MIN_MATCH_SIZE, Match3Settings, POINTS_PER_TILE,
    TILE_KIND_COUNT,
};
pub use types::{
    GameEvent, GameStatus, Match, MoveOutcome, Position, RejectReason, Tile, TileKind,
};
