//! Mark balance: X is never behind O and never more than one ahead.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let xs = engine.board().count(Player::X);
        let os = engine.board().count(Player::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
