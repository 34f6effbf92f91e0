//! Tictally - terminal front end

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictally::{App, AppConfig, Cli, init_tracing};
use tracing::{debug, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on drop, including on early error return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<(Self, Tui)> {
        enable_raw_mode()?;
        // Armed before anything else can fail so raw mode is always undone.
        let guard = Self;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config)?;

    info!(config = ?config, "Starting Tictally");

    let app = App::new(&config);
    let app = {
        let (_guard, mut terminal) = TerminalGuard::enter()?;
        run_app(&mut terminal, app, &config).await?
    };

    let score = app.engine().score();
    info!(%score, "Exiting");
    println!("Final score - {}", score);
    Ok(())
}

#[instrument(skip_all)]
async fn run_app(terminal: &mut Tui, mut app: App, config: &AppConfig) -> Result<App> {
    let tick = Duration::from_millis(*config.tick_ms());
    let mut events = EventStream::new();
    loop {
        terminal.draw(|f| tictally::draw(f, &app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("Input stream closed");
                    return Ok(app);
                }
            },
            _ = tokio::time::sleep(tick) => {}
        }

        if app.should_quit() {
            return Ok(app);
        }
    }
}
