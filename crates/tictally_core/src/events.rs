//! Notifications emitted by the engine.
//!
//! Presentation layers subscribe to these instead of polling the engine
//! after every input. Events are delivered synchronously, in subscription
//! order, before the mutating call returns.

use crate::rules::WinLine;
use crate::{Player, RoundState};
use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win {
        /// Player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Terminal round state matching this outcome.
    pub fn round_state(&self) -> RoundState {
        match self {
            Outcome::Win { winner, .. } => RoundState::Won(*winner),
            Outcome::Draw => RoundState::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { winner, .. } => write!(f, "Player {} wins", winner),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// State change broadcast to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh board, X to move.
    RoundStarted,
    /// A move was accepted and the round continues.
    TurnChanged {
        /// Player whose turn it is now.
        to_move: Player,
    },
    /// A move ended the round.
    RoundEnded(Outcome),
}

/// Receives engine notifications.
pub trait GameObserver {
    /// Called once per state change.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        (self)(event)
    }
}
