//! Round state machine and scoreboard owner.

use crate::error::EngineError;
use crate::events::{GameEvent, GameObserver, Outcome};
use crate::invariants::assert_invariants;
use crate::rules::{self, WinLine};
use crate::scores::{Score, ScoreTracker};
use crate::{Board, Player, Position, RoundState, Square};
use tracing::{debug, info, instrument};

/// Why a placement request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Ignored {
    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
    /// The round has ended; start a new one first.
    #[display("Round is over")]
    RoundOver,
}

/// Result of a placement request. Exactly one of these happens per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Nothing changed.
    Ignored(Ignored),
    /// Mark placed, round continues with `to_move`.
    TurnChanged {
        /// Player whose turn it is now.
        to_move: Player,
    },
    /// Mark placed and the round is over.
    RoundEnded(Outcome),
}

impl Placement {
    /// True if the request changed the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Placement::Ignored(_))
    }
}

/// Two-player tic-tac-toe engine with a scoreboard that survives rounds.
///
/// X always opens. Refused moves are reported, never fatal; only an index
/// that cannot name a square is an error.
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current: Player,
    pub(crate) state: RoundState,
    pub(crate) winning_line: Option<WinLine>,
    scores: ScoreTracker,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Creates an engine with an empty board and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            state: RoundState::InProgress,
            winning_line: None,
            scores: ScoreTracker::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for every subsequent notification.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: GameObserver + 'static,
    {
        self.observers.push(Box::new(observer));
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Clears the board and hands the first move to X. Scores are kept.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) {
        self.board = Board::new();
        self.current = Player::X;
        self.state = RoundState::InProgress;
        self.winning_line = None;
        info!(score = %self.scores.snapshot(), "Round started");
        self.emit(GameEvent::RoundStarted);
    }

    /// Clears the scoreboard and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        self.start_round();
    }

    /// Places the current player's mark at a board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] if `index` is not a square.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn place_mark(&mut self, index: usize) -> Result<Placement, EngineError> {
        let pos = Position::from_index(index).ok_or(EngineError::IndexOutOfRange { index })?;
        Ok(self.place(pos))
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.state.is_terminal() {
            debug!(state = ?self.state, "Move ignored, round is over");
            return Placement::Ignored(Ignored::RoundOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Move ignored, square occupied");
            return Placement::Ignored(Ignored::SquareOccupied(pos));
        }

        let player = self.current;
        self.board.set(pos, Square::Occupied(player));

        let placement = match rules::evaluate(&self.board) {
            Some(outcome) => self.finish(outcome),
            None => {
                self.current = player.opponent();
                debug!(to_move = %self.current, "Turn changed");
                Placement::TurnChanged {
                    to_move: self.current,
                }
            }
        };

        assert_invariants(self);

        match placement {
            Placement::TurnChanged { to_move } => self.emit(GameEvent::TurnChanged { to_move }),
            Placement::RoundEnded(outcome) => self.emit(GameEvent::RoundEnded(outcome)),
            Placement::Ignored(_) => {}
        }
        placement
    }

    fn finish(&mut self, outcome: Outcome) -> Placement {
        self.state = outcome.round_state();
        self.winning_line = outcome.line();
        match outcome.winner() {
            Some(winner) => self.scores.record_win(winner),
            None => self.scores.record_draw(),
        }
        info!(%outcome, score = %self.scores.snapshot(), "Round ended");
        Placement::RoundEnded(outcome)
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the round is over).
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the round state.
    pub fn round_state(&self) -> RoundState {
        self.state
    }

    /// Returns the completed line after a win.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the scoreboard.
    pub fn score(&self) -> Score {
        self.scores.snapshot()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("current", &self.current)
            .field("state", &self.state)
            .field("winning_line", &self.winning_line)
            .field("scores", &self.scores)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_ready() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.round_state(), RoundState::InProgress);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.score(), Score::default());
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_place_alternates() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.place(Position::Center),
            Placement::TurnChanged { to_move: Player::O }
        );
        assert_eq!(
            engine.place(Position::TopLeft),
            Placement::TurnChanged { to_move: Player::X }
        );
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_occupied_square_reported() {
        let mut engine = GameEngine::new();
        engine.place(Position::Center);
        assert_eq!(
            engine.place(Position::Center),
            Placement::Ignored(Ignored::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_debug_hides_observers() {
        let mut engine = GameEngine::new();
        engine.subscribe(|_: &GameEvent| {});
        let debug = format!("{:?}", engine);
        assert!(debug.contains("observers: 1"));
    }

    #[test]
    fn test_ignored_display() {
        assert_eq!(
            Ignored::SquareOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(Ignored::RoundOver.to_string(), "Round is over");
    }
}
