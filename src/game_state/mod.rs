mod board;

pub use board::{Board, PlacementError};

use std::fmt;
use std::str::FromStr;

use shakmaty::{File, Rank, Square};
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A board coordinate as `(row, col)`.
///
/// Row 0 is rank 8 (black's back rank) and row 7 is rank 1; col 0 is the
/// a-file. Components are signed so off-board coordinates can be expressed
/// and rejected by validation instead of at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> i8 {
        self.row
    }

    pub const fn col(self) -> i8 {
        self.col
    }

    /// True iff both components lie in `0..8`.
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Position shifted by the given row and column steps.
    ///
    /// Wraps at the limits of `i8`; the result is then off the board.
    #[inline]
    pub const fn offset(self, rows: i8, cols: i8) -> Self {
        Self::new(self.row.wrapping_add(rows), self.col.wrapping_add(cols))
    }

    /// Array indices for this position, if it is on the board.
    #[inline]
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.is_valid()
            .then_some((self.row as usize, self.col as usize))
    }

    /// The algebraic square for this position, if it is on the board.
    pub fn to_square(self) -> Option<Square> {
        let (row, col) = self.index()?;
        Some(Square::from_coords(
            File::ALL[col],
            Rank::ALL[BOARD_SIZE as usize - 1 - row],
        ))
    }
}

impl From<Square> for Position {
    fn from(square: Square) -> Self {
        let col = square.file().char() as u8 - b'a';
        let rank = square.rank().char() as u8 - b'1';
        Self::new(BOARD_SIZE - 1 - rank as i8, col as i8)
    }
}

/// Parse algebraic notation like "e2" (case-insensitive) into a Position.
///
/// ```
/// # use console_chess::game_state::Position;
/// let pos: Position = "e2".parse().unwrap();
/// assert_eq!((pos.row(), pos.col()), (6, 4));
/// ```
impl FromStr for Position {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 2 {
            return Err(MoveParseError::SquareLength(s.to_owned()));
        }
        s.to_ascii_lowercase()
            .parse::<Square>()
            .map(Position::from)
            .map_err(|_| MoveParseError::Coordinates(s.to_owned()))
    }
}

/// Algebraic notation for on-board positions, raw coordinates otherwise.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_square() {
            Some(square) => write!(f, "{square}"),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// A proposed relocation of one piece. No promotion or special-move payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// `to.row - from.row`, widened so any two positions fit.
    #[inline]
    pub const fn row_delta(self) -> i16 {
        self.to.row as i16 - self.from.row as i16
    }

    /// `to.col - from.col`, widened so any two positions fit.
    #[inline]
    pub const fn col_delta(self) -> i16 {
        self.to.col as i16 - self.from.col as i16
    }
}

/// Parse a move written as two squares, e.g. "e2 e4".
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [from, to] = parts.as_slice() else {
            return Err(MoveParseError::TokenCount(parts.len()));
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

/// History record form, e.g. "e2 e4".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Error when parsing a move typed by a player.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected two squares like 'e2 e4', found {0} token(s)")]
    TokenCount(usize),
    #[error("each square must be 2 characters (e.g. 'e2'), got '{0}'")]
    SquareLength(String),
    #[error("invalid coordinates '{0}': use letters a-h and numbers 1-8")]
    Coordinates(String),
}
