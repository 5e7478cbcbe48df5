use super::settings::Match3Settings;
use super::types::{Match, Position, Tile, TileKind};
use crate::session_rng::SessionRng;

/// The match-3 grid. Row-major flat storage; `None` cells exist only
/// between a clear and the gravity pass that refills them.
///
/// Operations never mutate the receiver: each returns a fresh board, so a
/// caller can keep any earlier state alive (previews, replays) without the
/// engine aliasing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<Tile>>,
    rows: usize,
    cols: usize,
    tile_kinds: usize,
    next_tile_id: u32,
}

impl Board {
    /// Generates a full board with no pre-existing run of three. Matched
    /// cells are resampled to a different kind (with a fresh id) until the
    /// detector comes up empty.
    pub fn generate(settings: &Match3Settings, rng: &mut SessionRng) -> Board {
        let mut board = Board {
            cells: Vec::with_capacity(settings.rows * settings.cols),
            rows: settings.rows,
            cols: settings.cols,
            tile_kinds: settings.tile_kinds,
            next_tile_id: 0,
        };

        for row in 0..board.rows {
            for col in 0..board.cols {
                let kind = board.random_kind(rng);
                let id = board.next_id();
                board.cells.push(Some(Tile { id, kind, row, col }));
            }
        }

        loop {
            let matches = board.find_matches();
            if matches.is_empty() {
                break;
            }
            for pos in super::matching::union_positions(&matches) {
                let idx = board.index_of(pos);
                if let Some(tile) = board.cells[idx] {
                    let kind = board.random_kind_excluding(tile.kind, rng);
                    let id = board.next_id();
                    board.cells[idx] = Some(Tile {
                        id,
                        kind,
                        row: pos.row,
                        col: pos.col,
                    });
                }
            }
        }

        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the tile at `pos`, or `None` when the position is out of
    /// bounds or the cell is a mid-cascade hole.
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells[pos.row * self.cols + pos.col].as_ref()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Mechanically exchanges two cells, updating each moved tile's
    /// coordinates while keeping its id and kind. Legality is the caller's
    /// concern; swapping the same pair again restores the original board.
    pub fn swap_tiles(&self, first: Position, second: Position) -> Board {
        let mut next = self.clone();
        let a = next.index_of(first);
        let b = next.index_of(second);
        next.cells.swap(a, b);
        if let Some(tile) = next.cells[a].as_mut() {
            tile.row = first.row;
            tile.col = first.col;
        }
        if let Some(tile) = next.cells[b].as_mut() {
            tile.row = second.row;
            tile.col = second.col;
        }
        next
    }

    /// Empties every cell named by any of the matches. Overlapping matches
    /// clear their union.
    pub fn clear_matches(&self, matches: &[Match]) -> Board {
        let mut next = self.clone();
        for m in matches {
            for &pos in &m.positions {
                let idx = next.index_of(pos);
                next.cells[idx] = None;
            }
        }
        next
    }

    /// Compacts every column downward (survivors keep id, kind, and
    /// relative order) and tops the column up with freshly generated tiles.
    /// Returns the settled board and the positions that received spawns.
    pub fn apply_gravity(&self, rng: &mut SessionRng) -> (Board, Vec<Position>) {
        let mut next = self.clone();
        let mut spawned = Vec::new();

        for col in 0..next.cols {
            // Walk from the bottom, sliding survivors into the lowest open
            // slot. The write pointer never passes the read pointer.
            let mut write_row = next.rows;
            for read_row in (0..next.rows).rev() {
                if let Some(mut tile) = next.cells[read_row * next.cols + col].take() {
                    write_row -= 1;
                    tile.row = write_row;
                    next.cells[write_row * next.cols + col] = Some(tile);
                }
            }

            for row in 0..write_row {
                let kind = next.random_kind(rng);
                let id = next.next_id();
                next.cells[row * next.cols + col] = Some(Tile { id, kind, row, col });
                spawned.push(Position::new(row, col));
            }
        }

        (next, spawned)
    }

    /// True when at least one adjacent swap would produce a match.
    pub fn has_valid_moves(&self) -> bool {
        self.find_valid_move().is_some()
    }

    /// First adjacent swap that would produce a match, scanning each cell's
    /// right and down neighbor so every adjacent pair is tried once. Doubles
    /// as the hint lookup.
    pub fn find_valid_move(&self) -> Option<(Position, Position)> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let here = Position::new(row, col);
                if col + 1 < self.cols {
                    let right = Position::new(row, col + 1);
                    if self.swap_tiles(here, right).has_any_match() {
                        return Some((here, right));
                    }
                }
                if row + 1 < self.rows {
                    let down = Position::new(row + 1, col);
                    if self.swap_tiles(here, down).has_any_match() {
                        return Some((here, down));
                    }
                }
            }
        }
        None
    }

    pub(crate) fn kind_at(&self, row: usize, col: usize) -> Option<TileKind> {
        self.cells[row * self.cols + col].map(|tile| tile.kind)
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position out of bounds: ({}, {})",
            pos.row,
            pos.col
        );
        pos.row * self.cols + pos.col
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_tile_id;
        self.next_tile_id += 1;
        id
    }

    fn random_kind(&self, rng: &mut SessionRng) -> TileKind {
        TileKind::from_index(rng.random_index(self.tile_kinds))
    }

    fn random_kind_excluding(&self, excluded: TileKind, rng: &mut SessionRng) -> TileKind {
        loop {
            let kind = self.random_kind(rng);
            if kind != excluded {
                return kind;
            }
        }
    }

    /// Builds a board from explicit kinds, one inner vec per row.
    #[cfg(test)]
    pub fn from_kinds(kind_rows: &[Vec<TileKind>]) -> Board {
        let rows = kind_rows.len();
        let cols = kind_rows[0].len();
        assert!(kind_rows.iter().all(|row| row.len() == cols));

        let mut board = Board {
            cells: Vec::with_capacity(rows * cols),
            rows,
            cols,
            tile_kinds: TileKind::ALL.len(),
            next_tile_id: 0,
        };
        for (row, kinds) in kind_rows.iter().enumerate() {
            for (col, &kind) in kinds.iter().enumerate() {
                let id = board.next_id();
                board.cells.push(Some(Tile { id, kind, row, col }));
            }
        }
        board
    }
}
