use serde::{Deserialize, Serialize};

use super::board::Board;

/// The six tile faces. Value-compared; glyph and color are fixed display
/// attributes, not engine state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileKind {
    Apple,
    Banana,
    Cherry,
    Grape,
    Orange,
    Pear,
}

impl TileKind {
    pub const ALL: [TileKind; 6] = [
        TileKind::Apple,
        TileKind::Banana,
        TileKind::Cherry,
        TileKind::Grape,
        TileKind::Orange,
        TileKind::Pear,
    ];

    pub fn from_index(index: usize) -> TileKind {
        Self::ALL[index]
    }

    pub fn glyph(self) -> char {
        match self {
            TileKind::Apple => '🍎',
            TileKind::Banana => '🍌',
            TileKind::Cherry => '🍒',
            TileKind::Grape => '🍇',
            TileKind::Orange => '🍊',
            TileKind::Pear => '🍐',
        }
    }

    pub fn color(self) -> (u8, u8, u8) {
        match self {
            TileKind::Apple => (220, 48, 48),
            TileKind::Banana => (245, 215, 66),
            TileKind::Cherry => (180, 30, 70),
            TileKind::Grape => (130, 60, 180),
            TileKind::Orange => (240, 140, 30),
            TileKind::Pear => (140, 190, 60),
        }
    }
}

/// One board cell's content. The id is unique within a board and is
/// reassigned whenever a tile's identity changes (initial fill, resample,
/// refill). A tile's `(row, col)` always equals its slot in the grid;
/// selection and animation state live with the caller, keyed by id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub id: u32,
    pub kind: TileKind,
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Four-directional adjacency: the positions differ by exactly one in
    /// exactly one axis.
    pub fn is_adjacent_to(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// A run of at least [`MIN_MATCH_SIZE`](super::MIN_MATCH_SIZE) equal-kind
/// tiles in one row or column. A cell on both a horizontal and a vertical
/// run appears in two separate matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub kind: TileKind,
    pub positions: Vec<Position>,
}

impl Match {
    pub fn size(&self) -> usize {
        self.positions.len()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Per-step notifications of an accepted move, in the order a caller
/// should animate them.
#[derive(Clone, Debug)]
pub enum GameEvent {
    TilesSwapped {
        first: Position,
        second: Position,
    },
    MatchesCleared {
        positions: Vec<Position>,
        points_earned: u32,
        combo_level: u32,
    },
    TilesRefilled {
        spawned: Vec<Position>,
    },
    BoardReshuffled,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RejectReason {
    OutOfBounds,
    NotAdjacent,
    NoMatch,
    GameOver,
}

/// Result of a player move attempt. A rejection leaves the session board
/// untouched; on `NoMatch` the `preview` carries the post-swap board so the
/// caller can show the swap before bouncing it back (swapping the same pair
/// again restores the original).
#[derive(Clone, Debug)]
pub enum MoveOutcome {
    Rejected {
        reason: RejectReason,
        preview: Option<Board>,
    },
    Accepted {
        events: Vec<GameEvent>,
        points_earned: u32,
    },
}
