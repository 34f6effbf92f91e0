//! Running scoreboard across rounds.

use crate::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot of the scoreboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Getters,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("X: {} | O: {} | Draws: {}", x_wins, o_wins, draws)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds ended in a draw.
    draws: u32,
}

impl Score {
    /// Builds a score from raw counters.
    pub fn new(x_wins: u32, o_wins: u32, draws: u32) -> Self {
        Self {
            x_wins,
            o_wins,
            draws,
        }
    }

    /// Wins recorded for one player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

/// Cumulative win and draw counters.
///
/// Only grows between explicit resets.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: Score,
}

impl ScoreTracker {
    /// Creates a tracker at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.score.x_wins = self.score.x_wins.saturating_add(1),
            Player::O => self.score.o_wins = self.score.o_wins.saturating_add(1),
        }
        debug!(score = %self.score, "Win recorded");
    }

    /// Counts a draw.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.score.draws = self.score.draws.saturating_add(1);
        debug!(score = %self.score, "Draw recorded");
    }

    /// Clears every counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.score = Score::default();
        debug!("Scores reset");
    }

    /// Current counters.
    pub fn snapshot(&self) -> Score {
        self.score
    }
}
