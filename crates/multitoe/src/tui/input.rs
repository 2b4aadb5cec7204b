//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use multitoe_core::Coord;

/// Cursor step on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(Step),
    /// Play the cell under the cursor.
    Play,
    /// Switch to this many players.
    SetPlayers(u8),
    /// Start a new game.
    ResetGame,
    /// Zero every score.
    ResetScores,
    /// Leave the application.
    Quit,
}

/// Maps a key to its action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Step::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Step::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Step::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Step::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Play),
        KeyCode::Char(c @ '2'..='5') => c.to_digit(10).map(|n| Action::SetPlayers(n as u8)),
        KeyCode::Char('r') => Some(Action::ResetGame),
        KeyCode::Char('s') => Some(Action::ResetScores),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, staying on a `dim` x `dim` board.
pub fn move_cursor(cursor: Coord, step: Step, dim: usize) -> Coord {
    let max = dim.saturating_sub(1);
    match step {
        Step::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        Step::Down => Coord::new((cursor.row + 1).min(max), cursor.col),
        Step::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        Step::Right => Coord::new(cursor.row, (cursor.col + 1).min(max)),
    }
}
