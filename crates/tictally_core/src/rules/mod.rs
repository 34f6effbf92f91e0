//! Round evaluation rules.
//!
//! Pure functions over a [`Board`](crate::Board); the engine calls them
//! after every accepted placement.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLine, winning_line};

use crate::Board;
use crate::events::Outcome;
use tracing::instrument;

/// Evaluates a board: the first completed line wins, a full board without
/// one is a draw, `None` means the round goes on.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((winner, line)) = winning_line(board) {
        return Some(Outcome::Win { winner, line });
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
