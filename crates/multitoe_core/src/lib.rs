//! Pure multi-player tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: board, cells, coordinates and player symbols
//! - **Rules**: the win scanner and draw detection, as pure functions
//! - **Scores**: the per-symbol win table and its JSON encoding
//! - **Store**: the key-value capability scores are persisted through
//! - **Game**: the turn/board state machine tying the pieces together
//!
//! # Example
//!
//! ```
//! use multitoe_core::{Coord, Game, MemoryStore, MoveOutcome, PlayerCount};
//!
//! # fn example() -> Result<(), multitoe_core::GameError> {
//! let mut game = Game::load(MemoryStore::new(), "scores", PlayerCount::new(2)?);
//! let outcome = game.apply_move(Coord::new(1, 1));
//! assert!(matches!(outcome, MoveOutcome::Continue { .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod rules;
mod scores;
mod store;
mod types;

pub use error::{GameError, GameErrorKind};
pub use game::{Game, MoveOutcome, RejectReason, Status};
pub use rules::{Direction, WinningRun};
pub use scores::ScoreTable;
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use types::{Board, BoardSize, Cell, Coord, PlayerCount, Symbol};
