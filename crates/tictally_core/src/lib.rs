//! Tic-tac-toe round engine with a running scoreboard.
//!
//! [`GameEngine`] owns the board, the turn, the round state and a
//! [`ScoreTracker`]. It knows nothing about rendering: front ends call
//! [`GameEngine::place_mark`], [`GameEngine::start_round`] and
//! [`GameEngine::reset_scores`], read state through the accessors, and
//! [`subscribe`](GameEngine::subscribe) to [`GameEvent`]s.
//!
//! ```
//! use tictally_core::{GameEngine, Player, RoundState};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.place_mark(index)?;
//! }
//! assert_eq!(engine.round_state(), RoundState::Won(Player::X));
//! assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//! assert_eq!(engine.place_mark(8)?.is_accepted(), false);
//! # Ok::<(), tictally_core::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
pub mod invariants;
mod position;
pub mod rules;
mod scores;
mod types;

pub use engine::{GameEngine, Ignored, Placement};
pub use error::EngineError;
pub use events::{GameEvent, GameObserver, Outcome};
pub use position::Position;
pub use rules::WinLine;
pub use scores::{Score, ScoreTracker};
pub use types::{Board, Player, RoundState, Square};
