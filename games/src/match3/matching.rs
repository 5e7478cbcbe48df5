use super::board::Board;
use super::settings::MIN_MATCH_SIZE;
use super::types::{Match, Position, TileKind};

impl Board {
    /// Every run of at least three equal kinds, rows first, then columns.
    /// A cell sitting on both a horizontal and a vertical run appears in
    /// two separate matches; callers clearing tiles take the union.
    pub fn find_matches(&self) -> Vec<Match> {
        let mut matches = Vec::new();
        for row in 0..self.rows() {
            scan_line(
                &mut matches,
                (0..self.cols()).map(|col| (Position::new(row, col), self.kind_at(row, col))),
            );
        }
        for col in 0..self.cols() {
            scan_line(
                &mut matches,
                (0..self.rows()).map(|row| (Position::new(row, col), self.kind_at(row, col))),
            );
        }
        matches
    }

    /// Short-circuiting form used by the move-availability sweep.
    pub fn has_any_match(&self) -> bool {
        for row in 0..self.rows() {
            if line_has_run((0..self.cols()).map(|col| self.kind_at(row, col))) {
                return true;
            }
        }
        for col in 0..self.cols() {
            if line_has_run((0..self.rows()).map(|row| self.kind_at(row, col))) {
                return true;
            }
        }
        false
    }
}

/// Deduplicated cell set covered by a list of matches, in first-seen order.
pub fn union_positions(matches: &[Match]) -> Vec<Position> {
    let mut positions = Vec::new();
    for m in matches {
        for &pos in &m.positions {
            if !positions.contains(&pos) {
                positions.push(pos);
            }
        }
    }
    positions
}

fn scan_line(
    matches: &mut Vec<Match>,
    line: impl Iterator<Item = (Position, Option<TileKind>)>,
) {
    let mut run: Vec<Position> = Vec::new();
    let mut run_kind: Option<TileKind> = None;

    for (pos, kind) in line {
        if kind.is_some() && kind == run_kind {
            run.push(pos);
            continue;
        }
        if let Some(finished) = run_kind
            && run.len() >= MIN_MATCH_SIZE
        {
            matches.push(Match {
                kind: finished,
                positions: std::mem::take(&mut run),
            });
        } else {
            run.clear();
        }
        run_kind = kind;
        if kind.is_some() {
            run.push(pos);
        }
    }

    if let Some(finished) = run_kind
        && run.len() >= MIN_MATCH_SIZE
    {
        matches.push(Match {
            kind: finished,
            positions: run,
        });
    }
}

fn line_has_run(line: impl Iterator<Item = Option<TileKind>>) -> bool {
    let mut run_kind: Option<TileKind> = None;
    let mut run_len = 0;

    for kind in line {
        if kind.is_some() && kind == run_kind {
            run_len += 1;
        } else {
            run_kind = kind;
            run_len = usize::from(kind.is_some());
        }
        if run_len >= MIN_MATCH_SIZE {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x8 diagonal-cyclic fill over four kinds; contains no run anywhere.
    fn clean_grid() -> Vec<Vec<TileKind>> {
        (0..8)
            .map(|row| {
                (0..8)
                    .map(|col| TileKind::from_index((row + col) % 4))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_clean_board_yields_no_matches() {
        let board = Board::from_kinds(&clean_grid());
        assert!(board.find_matches().is_empty());
        assert!(!board.has_any_match());
    }

    #[test]
    fn test_single_horizontal_run_detected_exactly() {
        // One planted run of exactly three Oranges at row 2, columns 3..=5.
        let mut grid = clean_grid();
        for col in 3..=5 {
            grid[2][col] = TileKind::Orange;
        }
        let board = Board::from_kinds(&grid);

        let matches = board.find_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, TileKind::Orange);
        assert_eq!(
            matches[0].positions,
            vec![Position::new(2, 3), Position::new(2, 4), Position::new(2, 5)]
        );
        assert!(board.has_any_match());
    }

    #[test]
    fn test_vertical_run_detected() {
        let mut grid = clean_grid();
        for row in 4..=6 {
            grid[row][1] = TileKind::Pear;
        }
        let board = Board::from_kinds(&grid);

        let matches = board.find_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, TileKind::Pear);
        assert_eq!(
            matches[0].positions,
            vec![Position::new(4, 1), Position::new(5, 1), Position::new(6, 1)]
        );
    }

    #[test]
    fn test_run_of_four_is_one_match() {
        let mut grid = clean_grid();
        for col in 2..=5 {
            grid[6][col] = TileKind::Orange;
        }
        let board = Board::from_kinds(&grid);

        let matches = board.find_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].size(), 4);
    }

    #[test]
    fn test_crossing_runs_stay_separate() {
        // Horizontal run at row 3, cols 2..=4 and vertical run at col 3,
        // rows 2..=4 share the center cell (3, 3).
        let mut grid = clean_grid();
        for col in 2..=4 {
            grid[3][col] = TileKind::Orange;
        }
        for row in 2..=4 {
            grid[row][3] = TileKind::Orange;
        }
        let board = Board::from_kinds(&grid);

        let matches = board.find_matches();

        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.kind == TileKind::Orange));
        assert!(matches.iter().all(|m| m.size() == 3));

        let union = union_positions(&matches);
        assert_eq!(union.len(), 5);
        assert!(union.contains(&Position::new(3, 3)));
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let mut grid = clean_grid();
        for col in 2..=5 {
            grid[5][col] = TileKind::Orange;
        }
        let board = Board::from_kinds(&grid).clear_matches(&[Match {
            kind: TileKind::Orange,
            positions: vec![Position::new(5, 3), Position::new(5, 4)],
        }]);

        assert!(board.find_matches().is_empty());
        assert!(!board.has_any_match());
    }

    #[test]
    fn test_two_disjoint_runs_detected() {
        let mut grid = clean_grid();
        for col in 0..=2 {
            grid[0][col] = TileKind::Orange;
        }
        for col in 4..=6 {
            grid[7][col] = TileKind::Pear;
        }
        let board = Board::from_kinds(&grid);

        let matches = board.find_matches();

        assert_eq!(matches.len(), 2);
        let kinds: Vec<TileKind> = matches.iter().map(|m| m.kind).collect();
        assert!(kinds.contains(&TileKind::Orange));
        assert!(kinds.contains(&TileKind::Pear));
    }
}
