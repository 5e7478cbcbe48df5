use serde::{Deserialize, Serialize};

use super::game_state::Match3GameState;
use super::settings::Match3Settings;
use super::types::Position;
use crate::session_rng::SessionRng;

/// One attempted swap, in the order the player made it. Rejected attempts
/// are recorded too: they draw no randomness and re-reject identically on
/// playback, which keeps the numbering aligned with the live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub first: Position,
    pub second: Position,
}

/// Seed, settings, and move list of one session. Because every random draw
/// goes through the seeded session rng, this is enough to rebuild the exact
/// final state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match3Replay {
    pub seed: u64,
    pub settings: Match3Settings,
    pub moves: Vec<RecordedMove>,
}

impl Match3Replay {
    pub fn new(seed: u64, settings: Match3Settings) -> Self {
        Self {
            seed,
            settings,
            moves: Vec::new(),
        }
    }

    pub fn record(&mut self, first: Position, second: Position) {
        self.moves.push(RecordedMove { first, second });
    }

    /// Re-runs the whole session from the seed.
    pub fn playback(&self) -> Result<Match3GameState, String> {
        let mut rng = SessionRng::new(self.seed);
        let mut state = Match3GameState::new(self.settings.clone(), &mut rng)?;
        for mv in &self.moves {
            state.attempt_move(mv.first, mv.second, &mut rng);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match3::types::MoveOutcome;

    #[test]
    fn test_playback_reproduces_live_session() {
        let seed = 42;
        let settings = Match3Settings::default();

        let mut rng = SessionRng::new(seed);
        let mut live = Match3GameState::new(settings.clone(), &mut rng).unwrap();
        let mut replay = Match3Replay::new(seed, settings);

        // Mix scoring moves with a deliberate rejection.
        for _ in 0..10 {
            let (first, second) = live.hint().unwrap();
            live.attempt_move(first, second, &mut rng);
            replay.record(first, second);
        }
        let rejected = live.attempt_move(Position::new(0, 0), Position::new(7, 7), &mut rng);
        assert!(matches!(rejected, MoveOutcome::Rejected { .. }));
        replay.record(Position::new(0, 0), Position::new(7, 7));

        let replayed = replay.playback().unwrap();

        assert_eq!(replayed.score(), live.score());
        assert_eq!(replayed.moves_made(), live.moves_made());
        assert_eq!(replayed.board(), live.board());
    }

    #[test]
    fn test_replay_survives_yaml_round_trip() {
        let seed = 7;
        let settings = Match3Settings::default();

        let mut rng = SessionRng::new(seed);
        let mut live = Match3GameState::new(settings.clone(), &mut rng).unwrap();
        let mut replay = Match3Replay::new(seed, settings);
        for _ in 0..5 {
            let (first, second) = live.hint().unwrap();
            live.attempt_move(first, second, &mut rng);
            replay.record(first, second);
        }

        let yaml = serde_yaml_ng::to_string(&replay).unwrap();
        let restored: Match3Replay = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(restored.moves, replay.moves);
        let replayed = restored.playback().unwrap();
        assert_eq!(replayed.score(), live.score());
        assert_eq!(replayed.board(), live.board());
    }
}
