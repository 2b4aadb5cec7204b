//! Win detection for boards of any supported size.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

use crate::{Board, Cell, Coord, Symbol};

/// Line directions a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
            Self::AntiDiagonal => (1, -1),
        }
    }

    /// Start cells of every window of `len` cells examined for a move at `at`.
    ///
    /// Rows and columns are only searched along the line through `at`;
    /// diagonals are searched across the whole board.
    fn window_starts(self, at: Coord, dim: usize, len: usize) -> Vec<Coord> {
        if len == 0 || len > dim {
            return Vec::new();
        }
        let last = dim - len;
        match self {
            Self::Horizontal => (0..=last).map(|c| Coord::new(at.row, c)).collect(),
            Self::Vertical => (0..=last).map(|r| Coord::new(r, at.col)).collect(),
            Self::Diagonal => (0..=last)
                .flat_map(|r| (0..=last).map(move |c| Coord::new(r, c)))
                .collect(),
            Self::AntiDiagonal => (0..=last)
                .flat_map(|r| (len - 1..dim).rev().map(move |c| Coord::new(r, c)))
                .collect(),
        }
    }

    /// The `len` coordinates of the window starting at `start`.
    fn window(self, start: Coord, len: usize) -> Vec<Coord> {
        let (dr, dc) = self.delta();
        (0..len as isize)
            .map(|i| {
                Coord::new(
                    start.row.wrapping_add_signed(dr * i),
                    start.col.wrapping_add_signed(dc * i),
                )
            })
            .collect()
    }
}

/// Ordered cells of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningRun {
    direction: Direction,
    cells: Vec<Coord>,
}

impl WinningRun {
    /// Direction the run follows.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Run coordinates, in scan order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Checks whether `at` is part of the run.
    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    /// Number of cells in the run.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for runs produced by [`scan`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Looks for a run of `symbol` after a move at `at`.
///
/// The run length is the board's win length (3 on 3x3, 4 on 6x6). Directions
/// are tried in [`Direction`] order and the first window filled entirely
/// with `symbol` is returned.
#[instrument(skip(board), fields(dim = board.dimension()))]
pub fn scan(board: &Board, at: Coord, symbol: Symbol) -> Option<WinningRun> {
    let dim = board.dimension();
    let len = board.size().win_length();
    let target = Cell::Occupied(symbol);

    for direction in Direction::iter() {
        for start in direction.window_starts(at, dim, len) {
            let cells = direction.window(start, len);
            if cells.iter().all(|c| board.get(*c) == Some(target)) {
                debug!(?direction, %start, "Winning run found");
                return Some(WinningRun { direction, cells });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    fn place(board: &mut Board, symbol: Symbol, coords: &[(usize, usize)]) {
        for &(r, c) in coords {
            board.set(Coord::new(r, c), Cell::Occupied(symbol)).unwrap();
        }
    }

    fn coords(run: &WinningRun) -> Vec<(usize, usize)> {
        run.cells().iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_no_run_on_empty_board() {
        let board = Board::new(BoardSize::Small);
        assert_eq!(scan(&board, Coord::new(1, 1), Symbol::from_index(0)), None);
    }

    #[test]
    fn test_top_row_small_board() {
        let a = Symbol::from_index(0);
        let mut board = Board::new(BoardSize::Small);
        place(&mut board, a, &[(0, 0), (0, 1), (0, 2)]);

        let run = scan(&board, Coord::new(0, 2), a).expect("row should win");
        assert_eq!(run.direction(), Direction::Horizontal);
        assert_eq!(coords(&run), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_column_small_board() {
        let b = Symbol::from_index(1);
        let mut board = Board::new(BoardSize::Small);
        place(&mut board, b, &[(0, 2), (1, 2), (2, 2)]);

        let run = scan(&board, Coord::new(1, 2), b).expect("column should win");
        assert_eq!(run.direction(), Direction::Vertical);
        assert_eq!(coords(&run), vec![(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_anti_diagonal_small_board() {
        let c = Symbol::from_index(2);
        let mut board = Board::new(BoardSize::Small);
        place(&mut board, c, &[(0, 2), (1, 1), (2, 0)]);

        let run = scan(&board, Coord::new(2, 0), c).expect("anti-diagonal should win");
        assert_eq!(run.direction(), Direction::AntiDiagonal);
        assert_eq!(coords(&run), vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_other_symbol_does_not_win() {
        let mut board = Board::new(BoardSize::Small);
        place(&mut board, Symbol::from_index(0), &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(scan(&board, Coord::new(0, 2), Symbol::from_index(1)), None);
    }

    #[test]
    fn test_large_board_needs_four() {
        let a = Symbol::from_index(0);
        let mut board = Board::new(BoardSize::Large);
        place(&mut board, a, &[(3, 1), (3, 2), (3, 3)]);
        assert_eq!(scan(&board, Coord::new(3, 3), a), None);

        place(&mut board, a, &[(3, 4)]);
        let run = scan(&board, Coord::new(3, 4), a).expect("four in a row should win");
        assert_eq!(run.len(), 4);
        assert_eq!(coords(&run), vec![(3, 1), (3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_large_board_reports_first_window() {
        let d = Symbol::from_index(3);
        let mut board = Board::new(BoardSize::Large);
        place(&mut board, d, &[(0, 5), (1, 5), (2, 5), (3, 5), (4, 5)]);

        let run = scan(&board, Coord::new(4, 5), d).expect("column should win");
        assert_eq!(coords(&run), vec![(0, 5), (1, 5), (2, 5), (3, 5)]);
    }

    #[test]
    fn test_large_board_diagonal_off_main_line() {
        let e = Symbol::from_index(4);
        let mut board = Board::new(BoardSize::Large);
        place(&mut board, e, &[(1, 2), (2, 3), (3, 4), (4, 5)]);

        let run = scan(&board, Coord::new(2, 3), e).expect("diagonal should win");
        assert_eq!(run.direction(), Direction::Diagonal);
        assert_eq!(coords(&run), vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
    }

    #[test]
    fn test_large_board_anti_diagonal() {
        let b = Symbol::from_index(1);
        let mut board = Board::new(BoardSize::Large);
        place(&mut board, b, &[(2, 3), (3, 2), (4, 1), (5, 0)]);

        let run = scan(&board, Coord::new(5, 0), b).expect("anti-diagonal should win");
        assert_eq!(run.direction(), Direction::AntiDiagonal);
        assert_eq!(coords(&run), vec![(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn test_broken_line_is_not_a_run() {
        let a = Symbol::from_index(0);
        let mut board = Board::new(BoardSize::Large);
        place(&mut board, a, &[(0, 0), (0, 1), (0, 3), (0, 4)]);
        board
            .set(Coord::new(0, 2), Cell::Occupied(Symbol::from_index(1)))
            .unwrap();
        assert_eq!(scan(&board, Coord::new(0, 4), a), None);
    }

    #[test]
    fn test_run_length_matches_board() {
        for size in [BoardSize::Small, BoardSize::Large] {
            let a = Symbol::from_index(0);
            let mut board = Board::new(size);
            let dim = size.dimension();
            for r in 0..dim {
                board.set(Coord::new(r, r), Cell::Occupied(a)).unwrap();
            }
            let run = scan(&board, Coord::new(0, 0), a).expect("diagonal should win");
            assert_eq!(run.len(), size.win_length());
        }
    }
}
