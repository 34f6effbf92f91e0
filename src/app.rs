//! Application state and logic.

use crossterm::event::KeyCode;
use tictally_core::{GameEngine, GameEvent, Outcome, Player, Position, RoundState};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::input::{self, Action};

/// Main application state.
///
/// Owns the engine and mirrors its notifications into a status line.
/// Engine events arrive over a channel and are applied by
/// [`App::drain_events`].
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    events: mpsc::UnboundedReceiver<GameEvent>,
    cursor: Position,
    status_message: String,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates the app and starts the first round.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut engine = GameEngine::new();
        engine.subscribe(move |event: &GameEvent| {
            // Receiver lives as long as the app; a closed channel means shutdown.
            let _ = event_tx.send(*event);
        });

        let mut app = Self {
            engine,
            events: event_rx,
            cursor: Position::Center,
            status_message: String::new(),
            show_hints: *config.show_hints(),
            should_quit: false,
        };
        app.engine.start_round();
        app.drain_events();
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether empty squares show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key, self.cursor) else {
            return;
        };
        debug!(?action, "Key mapped");

        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::Place(pos) => {
                self.cursor = pos;
                let placement = self.engine.place(pos);
                if !placement.is_accepted() {
                    debug!(?placement, "Placement ignored");
                }
            }
            Action::NewRound => self.engine.start_round(),
            Action::ResetScores => self.engine.reset_scores(),
            Action::Quit => self.should_quit = true,
        }
        self.drain_events();
    }

    /// Applies every pending engine notification.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    /// Updates the status line for an engine notification.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: GameEvent) {
        self.status_message = match event {
            GameEvent::RoundStarted => {
                self.cursor = Position::Center;
                turn_message(Player::X)
            }
            GameEvent::TurnChanged { to_move } => turn_message(to_move),
            GameEvent::RoundEnded(Outcome::Win { winner, .. }) => {
                format!("Player {} wins! Press n for a new round.", winner)
            }
            GameEvent::RoundEnded(Outcome::Draw) => {
                "Draw! Press n for a new round.".to_string()
            }
        };
    }

    /// Whether squares still accept marks.
    pub fn is_active(&self) -> bool {
        self.engine.round_state() == RoundState::InProgress
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}
