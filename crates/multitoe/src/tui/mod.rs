//! Terminal UI for multi-player tic-tac-toe.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use multitoe_core::{Game, KeyValueStore};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{error, info, instrument, warn};

use app::App;

/// Runs the game in the terminal until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal
/// on exit, including when the loop fails.
#[instrument(skip(game), fields(players = %game.player_count()))]
pub fn run_tui<S: KeyValueStore>(game: Game<S>) -> Result<()> {
    info!("Starting multitoe TUI");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(game);
    let res = run_app(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    if let Err(ref err) = res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res.and(restored)
}

/// Enters raw mode and the alternate screen, undoing both if a later step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let setup = execute!(io::stdout(), EnterAlternateScreen)
        .map_err(anyhow::Error::from)
        .and_then(|()| Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?));
    undo_on_error(setup, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Leaves the alternate screen and raw mode, attempting every step even if
/// an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Runs `cleanup` when `result` is an error, then passes `result` through.
fn undo_on_error<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        warn!("Terminal setup failed, restoring terminal");
        cleanup();
    }
    result
}

/// Draw, wait for a key, apply it; repeat until the app stops running.
fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: KeyValueStore,
{
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, &*app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = input::action_for(key.code) {
                app.handle(action);
            }
        }
    }
    Ok(())
}
