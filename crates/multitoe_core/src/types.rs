//! Core domain types for multi-player tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{GameError, GameErrorKind};

/// Fewest players a game accepts.
pub const MIN_PLAYERS: u8 = 2;
/// Most players a game accepts.
pub const MAX_PLAYERS: u8 = 5;

/// Player symbol, assigned positionally from the player index.
///
/// Index 0 is `A`, index 1 is `B`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Symbol(u8);

impl Symbol {
    /// Creates the symbol for the player at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidSymbol`] unless `index` is below
    /// [`MAX_PLAYERS`].
    #[track_caller]
    pub fn new(index: u8) -> Result<Self, GameError> {
        if index < MAX_PLAYERS {
            Ok(Self(index))
        } else {
            Err(GameError::new(GameErrorKind::InvalidSymbol(index)))
        }
    }

    /// Symbol for an index already known to be below [`MAX_PLAYERS`].
    pub(crate) fn from_index(index: u8) -> Self {
        debug_assert!(index < MAX_PLAYERS);
        Self(index)
    }

    /// Returns the player index this symbol belongs to.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the letter shown for this symbol.
    pub fn letter(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = GameError;

    #[track_caller]
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Number of players in a game, always within 2..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Validates a raw player count.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidPlayerCount`] outside 2..=5.
    #[instrument]
    pub fn new(count: u8) -> Result<Self, GameError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            Ok(Self(count))
        } else {
            Err(GameError::new(GameErrorKind::InvalidPlayerCount(count)))
        }
    }

    /// Returns the raw count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates the symbols in play, in turn order.
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        (0..self.0).map(Symbol::from_index)
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = GameError;

    #[track_caller]
    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.0
    }
}

/// A cell position on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Symbol),
}

/// The two board presets, derived from the player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 3x3 board, three in a row wins.
    Small,
    /// 6x6 board, four in a row wins.
    Large,
}

impl BoardSize {
    /// Board used for the given number of players.
    #[instrument]
    pub fn for_players(count: PlayerCount) -> Self {
        if count.get() <= 3 { Self::Small } else { Self::Large }
    }

    /// Side length of the board.
    pub fn dimension(self) -> usize {
        match self {
            Self::Small => 3,
            Self::Large => 6,
        }
    }

    /// Length of the run needed to win.
    pub fn win_length(self) -> usize {
        match self {
            Self::Small => 3,
            Self::Large => 4,
        }
    }
}

/// Square board, cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let dim = size.dimension();
        Self {
            size,
            cells: vec![Cell::Empty; dim * dim],
        }
    }

    /// Returns the board preset.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the side length.
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    fn offset(&self, at: Coord) -> Option<usize> {
        let dim = self.dimension();
        (at.row < dim && at.col < dim).then_some(at.row * dim + at.col)
    }

    /// Returns the cell at `at`, or `None` if it is off the board.
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.offset(at).map(|i| self.cells[i])
    }

    /// Overwrites the cell at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OutOfBounds`] if `at` is off the board.
    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), GameError> {
        let i = self
            .offset(at)
            .ok_or_else(|| GameError::new(GameErrorKind::OutOfBounds(at)))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks whether the cell at `at` is on the board and empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Cell::Empty))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension())
    }

    /// Formats the board as plain text, `.` marking empty cells.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".".to_string(),
                        Cell::Occupied(symbol) => symbol.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
