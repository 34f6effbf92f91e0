//! Turn parity: the player to move follows from the mark counts.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: while the round is live, X is to move exactly when both
/// players have the same number of marks.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.round_state().is_terminal() {
            return true;
        }
        let even = engine.board().count(Player::X) == engine.board().count(Player::O);
        let expected = if even { Player::X } else { Player::O };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}
