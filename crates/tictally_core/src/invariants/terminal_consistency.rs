//! Terminal consistency: the reported outcome matches the board.

use super::Invariant;
use crate::rules::is_full;
use crate::{GameEngine, RoundState};

/// Invariant: a winning line is recorded exactly when the round is won and
/// it belongs to the winner; a draw only happens on a full board.
pub struct TerminalConsistencyInvariant;

impl Invariant<GameEngine> for TerminalConsistencyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match (engine.round_state(), engine.winning_line()) {
            (RoundState::Won(winner), Some(line)) => line.owner(engine.board()) == Some(winner),
            (RoundState::Draw, None) => is_full(engine.board()),
            (RoundState::InProgress, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning line present only for a won round and held by the winner"
    }
}
