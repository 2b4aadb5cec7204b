//! Game error types.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::Coord;

/// Kinds of failure the game logic can report.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Player count outside the supported 2..=5 range.
    #[display("Unsupported player count {} (expected 2-5)", _0)]
    InvalidPlayerCount(u8),

    /// Player index with no symbol; symbols run from `A` to `E`.
    #[display("Unsupported player index {} (expected 0-4)", _0)]
    InvalidSymbol(u8),

    /// Persisted score data could not be decoded.
    #[display("Corrupt score table: {}", _0)]
    CorruptScores(String),

    /// Coordinate does not lie on the board.
    #[display("Coordinate {} is off the board", _0)]
    OutOfBounds(Coord),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
