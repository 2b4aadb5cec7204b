//! Application state and logic.

use multitoe_core::{Coord, Game, KeyValueStore, MoveOutcome, PlayerCount};
use tracing::{debug, instrument, warn};

use super::input::{Action, move_cursor};

/// Main application state: the game plus the keyboard cursor.
#[derive(Debug)]
pub struct App<S> {
    game: Game<S>,
    cursor: Coord,
    message: Option<String>,
    running: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates a new application around `game`.
    pub fn new(game: Game<S>) -> Self {
        Self {
            game,
            cursor: Coord::new(0, 0),
            message: None,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the transient message shown under the board.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Checks whether the event loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Cursor(step) => {
                self.cursor = move_cursor(self.cursor, step, self.game.board().dimension());
            }
            Action::Play => {
                self.message = match self.game.apply_move(self.cursor) {
                    MoveOutcome::Rejected(reason) => Some(format!("Can't play there: {}", reason)),
                    MoveOutcome::Continue { .. } => None,
                    MoveOutcome::Won(_) | MoveOutcome::Draw => {
                        Some("Press r for a new game".to_string())
                    }
                };
            }
            Action::SetPlayers(n) => match PlayerCount::new(n) {
                Ok(count) if count == self.game.player_count() => {}
                Ok(count) => {
                    self.game.change_player_count(count);
                    self.cursor = Coord::new(0, 0);
                    self.message = None;
                }
                Err(e) => {
                    warn!(error = %e, "Player count rejected");
                    self.message = Some(e.kind().to_string());
                }
            },
            Action::ResetGame => {
                self.game.reset_game();
                self.message = None;
            }
            Action::ResetScores => {
                self.game.reset_scores();
                self.message = Some("Scores reset".to_string());
            }
            Action::Quit => self.running = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Step;
    use multitoe_core::{MemoryStore, Status, Symbol};

    fn app(players: u8) -> App<MemoryStore> {
        let count = PlayerCount::new(players).unwrap();
        App::new(Game::load(MemoryStore::new(), "scores", count))
    }

    #[test]
    fn test_play_at_cursor() {
        let mut app = app(2);
        app.handle(Action::Cursor(Step::Right));
        app.handle(Action::Cursor(Step::Down));
        app.handle(Action::Play);

        assert_eq!(app.cursor(), Coord::new(1, 1));
        assert_eq!(app.game().moves_played(), 1);
        assert_eq!(app.game().current_symbol(), Symbol::new(1).unwrap());
        assert_eq!(app.message(), None);

        app.handle(Action::Play);
        assert_eq!(app.message(), Some("Can't play there: cell is occupied"));
        assert_eq!(app.game().moves_played(), 1);
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = app(2);
        // A: (0,0) (0,1) (0,2); B: (1,0) (1,1)
        for steps in [
            &[][..],
            &[Step::Down][..],
            &[Step::Up, Step::Right][..],
            &[Step::Down][..],
            &[Step::Up, Step::Right][..],
        ] {
            for step in steps {
                app.handle(Action::Cursor(*step));
            }
            app.handle(Action::Play);
        }

        assert_eq!(app.game().status(), Status::Won(Symbol::new(0).unwrap()));
        assert_eq!(app.message(), Some("Press r for a new game"));

        app.handle(Action::ResetGame);
        assert_eq!(app.game().status(), Status::Idle);
        assert_eq!(app.game().moves_played(), 0);
        assert_eq!(app.game().scores().get(Symbol::new(0).unwrap()), 1);
    }

    #[test]
    fn test_change_players_resets_cursor() {
        let mut app = app(2);
        app.handle(Action::Cursor(Step::Down));
        app.handle(Action::SetPlayers(5));

        assert_eq!(app.cursor(), Coord::new(0, 0));
        assert_eq!(app.game().board().dimension(), 6);
        assert_eq!(app.game().scores().len(), 5);
    }

    #[test]
    fn test_same_player_count_keeps_game() {
        let mut app = app(3);
        app.handle(Action::Play);
        app.handle(Action::SetPlayers(3));
        assert_eq!(app.game().moves_played(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app(2);
        assert!(app.is_running());
        app.handle(Action::Quit);
        assert!(!app.is_running());
    }
}
