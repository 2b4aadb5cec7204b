//! Draw detection.

use tracing::instrument;

use super::win::scan;
use crate::{Board, Coord, Symbol};

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks whether the move at `at` by `symbol` ended the game in a draw.
///
/// A draw is a full board on which the mover formed no run.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, at: Coord, symbol: Symbol) -> bool {
    is_full(board) && scan(board, at, symbol).is_none()
}
