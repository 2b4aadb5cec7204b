//! Turn and board state machine.
//!
//! A [`Game`] moves through `playing -> {won, drawn}` and back to `playing`
//! on reset. Rejected moves are silent no-ops: the caller learns about them
//! through [`MoveOutcome::Rejected`], but no state changes.

use derive_more::Display;
use tracing::{debug, info, instrument, warn};

use crate::rules::{self, WinningRun};
use crate::{Board, BoardSize, Cell, Coord, KeyValueStore, PlayerCount, ScoreTable, Symbol};

/// Headline shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Status {
    /// Game in progress, nobody has won yet.
    #[display("Multi-Player Tic Tac Toe")]
    Idle,
    /// A player completed a run.
    #[display("Player {} Wins!", _0)]
    Won(Symbol),
    /// The board filled up without a run.
    #[display("It's a Draw!")]
    Draw,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RejectReason {
    /// The game already ended.
    #[display("game is over")]
    Locked,
    /// Someone already played there.
    #[display("cell is occupied")]
    Occupied,
    /// The coordinate is off the board.
    #[display("cell is off the board")]
    OutOfBounds,
}

/// Result of [`Game::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(RejectReason),
    /// The move stood and play passes to `next`.
    Continue {
        /// Symbol whose turn it is now.
        next: Symbol,
    },
    /// The move completed a run.
    Won(WinningRun),
    /// The move filled the board without a run.
    Draw,
}

/// Multi-player tic-tac-toe state machine.
///
/// Owns the board, turn cursor, lock flag and score table. Scores are
/// written to the injected store under a fixed key whenever they change
/// through a win, and removed on a score reset. Store failures are logged
/// and otherwise ignored.
#[derive(Debug)]
pub struct Game<S> {
    store: S,
    scores_key: String,
    player_count: PlayerCount,
    board: Board,
    cursor: u8,
    locked: bool,
    winning: Option<WinningRun>,
    status: Status,
    scores: ScoreTable,
}

impl<S: KeyValueStore> Game<S> {
    /// Creates a game, reading any persisted score table from `store`.
    ///
    /// A stored table is used as-is, even if it was written for a different
    /// player count. Missing, unreadable or corrupt data yields a zeroed table.
    #[instrument(skip(store, scores_key))]
    pub fn load(store: S, scores_key: impl Into<String>, player_count: PlayerCount) -> Self {
        let scores_key = scores_key.into();
        let scores = match store.get(&scores_key) {
            Ok(Some(text)) => match ScoreTable::from_json(&text) {
                Ok(table) => {
                    info!(key = %scores_key, entries = table.len(), "Loaded persisted scores");
                    table
                }
                Err(e) => {
                    warn!(key = %scores_key, error = %e, "Ignoring corrupt persisted scores");
                    ScoreTable::seeded(player_count)
                }
            },
            Ok(None) => {
                debug!(key = %scores_key, "No persisted scores, starting from zero");
                ScoreTable::seeded(player_count)
            }
            Err(e) => {
                warn!(key = %scores_key, error = %e, "Failed to read persisted scores");
                ScoreTable::seeded(player_count)
            }
        };

        let size = BoardSize::for_players(player_count);
        Self {
            store,
            scores_key,
            player_count,
            board: Board::new(size),
            cursor: 0,
            locked: false,
            winning: None,
            status: Status::Idle,
            scores,
        }
    }

    /// Clears the board for a fresh game at the current size.
    fn initialize(&mut self) {
        self.board = Board::new(BoardSize::for_players(self.player_count));
        self.cursor = 0;
        self.locked = false;
        self.winning = None;
        self.status = Status::Idle;
    }

    /// Plays the current player's symbol at `at`.
    #[instrument(skip(self), fields(player = %self.current_symbol()))]
    pub fn apply_move(&mut self, at: Coord) -> MoveOutcome {
        if self.locked {
            debug!("Move ignored, game is over");
            return MoveOutcome::Rejected(RejectReason::Locked);
        }
        match self.board.get(at) {
            None => {
                debug!("Move ignored, off the board");
                return MoveOutcome::Rejected(RejectReason::OutOfBounds);
            }
            Some(Cell::Occupied(_)) => {
                debug!("Move ignored, cell occupied");
                return MoveOutcome::Rejected(RejectReason::Occupied);
            }
            Some(Cell::Empty) => {}
        }

        let symbol = self.current_symbol();
        if let Err(e) = self.board.set(at, Cell::Occupied(symbol)) {
            warn!(error = %e, "Board rejected a checked coordinate");
            return MoveOutcome::Rejected(RejectReason::OutOfBounds);
        }

        if let Some(run) = rules::scan(&self.board, at, symbol) {
            self.locked = true;
            self.winning = Some(run.clone());
            self.status = Status::Won(symbol);
            let wins = self.scores.record_win(symbol);
            info!(%symbol, wins, board = %self.board.display(), "Player wins");
            self.persist_scores();
            return MoveOutcome::Won(run);
        }

        if rules::is_full(&self.board) {
            self.locked = true;
            self.status = Status::Draw;
            info!("Game drawn");
            return MoveOutcome::Draw;
        }

        self.cursor = (self.cursor + 1) % self.player_count.get();
        let next = self.current_symbol();
        debug!(%next, "Turn passes");
        MoveOutcome::Continue { next }
    }

    /// Starts a new game, keeping player count and scores.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!("Resetting game");
        self.initialize();
    }

    /// Zeroes every current player's score and deletes the persisted table.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Resetting scores");
        self.scores = ScoreTable::seeded(self.player_count);
        if let Err(e) = self.store.remove(&self.scores_key) {
            warn!(key = %self.scores_key, error = %e, "Failed to clear persisted scores");
        }
    }

    /// Switches to `count` players, re-seeding scores and clearing the board.
    #[instrument(skip(self))]
    pub fn change_player_count(&mut self, count: PlayerCount) {
        info!(from = %self.player_count, to = %count, "Changing player count");
        self.player_count = count;
        self.scores = ScoreTable::seeded(count);
        self.initialize();
    }

    fn persist_scores(&mut self) {
        let text = self.scores.to_json();
        if let Err(e) = self.store.set(&self.scores_key, &text) {
            warn!(key = %self.scores_key, error = %e, "Failed to persist scores");
        }
    }
}

impl<S> Game<S> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board preset in use.
    pub fn board_size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the score table.
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    /// Returns the turn cursor, in `0..player_count`.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Returns the symbol whose turn it is.
    pub fn current_symbol(&self) -> Symbol {
        Symbol::from_index(self.cursor)
    }

    /// Checks whether the game has ended.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the winning run, if any.
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning.as_ref()
    }

    /// Returns the cells of the winning run; empty when nobody has won.
    pub fn winning_cells(&self) -> &[Coord] {
        self.winning.as_ref().map(WinningRun::cells).unwrap_or(&[])
    }

    /// Returns the current headline.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of moves played in the current game.
    pub fn moves_played(&self) -> usize {
        self.board.occupied()
    }

    /// Key the score table is persisted under.
    pub fn scores_key(&self) -> &str {
        &self.scores_key
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the game, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}
