use common::Validate;

use super::board::Board;
use super::matching::union_positions;
use super::scoring::calculate_score;
use super::settings::Match3Settings;
use super::types::{GameEvent, GameStatus, MoveOutcome, Position, RejectReason};
use crate::session_rng::SessionRng;

/// One match-3 session: the authoritative board plus score, move count,
/// and status. Pacing between the returned events is the caller's concern;
/// the engine resolves a whole move synchronously.
pub struct Match3GameState {
    board: Board,
    settings: Match3Settings,
    score: u32,
    moves_made: u32,
    status: GameStatus,
}

impl Match3GameState {
    /// Builds a session on a fresh board. Boards that come out of the
    /// generator without a single legal move are discarded and regenerated.
    pub fn new(settings: Match3Settings, rng: &mut SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let board = generate_playable(&settings, rng);
        Ok(Self {
            board,
            settings,
            score: 0,
            moves_made: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Applies a player's swap attempt and resolves any cascades until the
    /// board is stable again. Rejected attempts leave the session untouched.
    pub fn attempt_move(
        &mut self,
        first: Position,
        second: Position,
        rng: &mut SessionRng,
    ) -> MoveOutcome {
        if self.status != GameStatus::InProgress {
            return MoveOutcome::Rejected {
                reason: RejectReason::GameOver,
                preview: None,
            };
        }
        if !self.in_bounds(first) || !self.in_bounds(second) {
            return MoveOutcome::Rejected {
                reason: RejectReason::OutOfBounds,
                preview: None,
            };
        }
        if !first.is_adjacent_to(second) {
            return MoveOutcome::Rejected {
                reason: RejectReason::NotAdjacent,
                preview: None,
            };
        }

        let swapped = self.board.swap_tiles(first, second);
        if !swapped.has_any_match() {
            return MoveOutcome::Rejected {
                reason: RejectReason::NoMatch,
                preview: Some(swapped),
            };
        }

        let mut events = vec![GameEvent::TilesSwapped { first, second }];
        self.board = swapped;

        let mut points_earned = 0;
        let mut combo_level = 1;
        loop {
            let matches = self.board.find_matches();
            if matches.is_empty() {
                break;
            }

            let points = calculate_score(
                &matches,
                combo_level,
                self.settings.points_per_tile,
                self.settings.combo_multiplier,
            );
            events.push(GameEvent::MatchesCleared {
                positions: union_positions(&matches),
                points_earned: points,
                combo_level,
            });

            self.board = self.board.clear_matches(&matches);
            let (settled, spawned) = self.board.apply_gravity(rng);
            self.board = settled;
            events.push(GameEvent::TilesRefilled { spawned });

            points_earned += points;
            combo_level += 1;
        }

        self.score += points_earned;
        self.moves_made += 1;

        if !self.board.has_valid_moves() {
            self.board = generate_playable(&self.settings, rng);
            events.push(GameEvent::BoardReshuffled);
        }

        self.update_status();

        MoveOutcome::Accepted {
            events,
            points_earned,
        }
    }

    /// Adjacent swap that would score, for the hint button.
    pub fn hint(&self) -> Option<(Position, Position)> {
        self.board.find_valid_move()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &Match3Settings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.board.rows() && pos.col < self.board.cols()
    }

    fn update_status(&mut self) {
        if self.settings.target_score > 0 && self.score >= self.settings.target_score {
            self.status = GameStatus::Won;
        } else if self.settings.move_limit > 0 && self.moves_made >= self.settings.move_limit {
            self.status = GameStatus::Lost;
        }
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

fn generate_playable(settings: &Match3Settings, rng: &mut SessionRng) -> Board {
    loop {
        let board = Board::generate(settings, rng);
        if board.has_valid_moves() {
            return board;
        }
    }
}
