use std::fmt;

use shakmaty::{Color, Piece, Role};
use thiserror::Error;

use super::{BOARD_SIZE, Position};

const SIZE: usize = BOARD_SIZE as usize;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [Role; SIZE] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// The 8×8 grid of squares, each holding at most one piece.
///
/// Only knows how to read and write squares. Movement rules live in
/// [`MoveValidator`](crate::game_logic::MoveValidator).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates a board holding the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// Creates a board with every square empty.
    pub const fn empty() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// Resets the board to the standard starting position.
    ///
    /// White occupies rows 6-7 (ranks 2 and 1), black rows 0-1 (ranks 8 and 7).
    pub fn initialize(&mut self) {
        self.squares = [[None; SIZE]; SIZE];
        for (col, role) in BACK_RANK.into_iter().enumerate() {
            self.squares[0][col] = Some(Piece { color: Color::Black, role });
            self.squares[1][col] = Some(Piece { color: Color::Black, role: Role::Pawn });
            self.squares[6][col] = Some(Piece { color: Color::White, role: Role::Pawn });
            self.squares[7][col] = Some(Piece { color: Color::White, role });
        }
    }

    /// Piece at the given position. Off-board positions read as empty.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        pos.index().and_then(|(row, col)| self.squares[row][col])
    }

    /// Writes a square. Off-board positions are ignored.
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some((row, col)) = pos.index() {
            self.squares[row][col] = piece;
        }
    }

    /// Relocates whatever occupies `from` onto `to` and clears `from`.
    ///
    /// Performs no rule checks; call only after the move has been validated.
    /// Does nothing if either position is off the board.
    pub fn move_piece(&mut self, from: Position, to: Position) {
        if let (Some((fr, fc)), Some((tr, tc))) = (from.index(), to.index()) {
            self.squares[tr][tc] = self.squares[fr][fc].take();
        }
    }

    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    /// True if nothing stands on `pos`. Also true for off-board positions.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// All occupied squares, row by row from rank 8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as i8, col as i8), piece))
            })
        })
    }

    /// Builds a board from the piece-placement field of a FEN string,
    /// e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != SIZE {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.into_iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=SIZE as u32).contains(&skip) {
                        return Err(PlacementError::Skip(ch));
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(ch).ok_or(PlacementError::Piece(ch))?;
                    if col < SIZE {
                        board.squares[row][col] = Some(piece);
                    }
                    col += 1;
                }
                if col > SIZE {
                    break;
                }
            }
            if col != SIZE {
                return Err(PlacementError::RankLength {
                    rank: (SIZE - row) as u8,
                    squares: col,
                });
            }
        }
        Ok(board)
    }

    /// The FEN piece-placement field for this board.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for (row, cells) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if gap > 0 {
                            out.push((b'0' + gap) as char);
                            gap = 0;
                        }
                        out.push(piece.char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push((b'0' + gap) as char);
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.placement()).finish()
    }
}

/// Error when parsing a piece-placement string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks separated by '/', found {0}")]
    RankCount(usize),
    #[error("invalid empty-square count '{0}', expected 1-8")]
    Skip(char),
    #[error("invalid piece character '{0}'")]
    Piece(char),
    #[error("rank {rank} describes {squares} squares instead of 8")]
    RankLength { rank: u8, squares: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    fn piece(color: Color, role: Role) -> Option<Piece> {
        Some(Piece { color, role })
    }

    #[test]
    fn test_initial_back_ranks() {
        let board = Board::new();
        for (col, role) in BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            assert_eq!(board.piece_at(Position::new(7, col)), piece(Color::White, role));
            assert_eq!(board.piece_at(Position::new(0, col)), piece(Color::Black, role));
            assert_eq!(
                board.piece_at(Position::new(6, col)),
                piece(Color::White, Role::Pawn)
            );
            assert_eq!(
                board.piece_at(Position::new(1, col)),
                piece(Color::Black, Role::Pawn)
            );
        }
    }

    #[test]
    fn test_initial_middle_is_empty() {
        let board = Board::new();
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(Position::new(row, col)));
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_queen_and_king_files() {
        let board = Board::new();
        let d1: Position = "d1".parse().unwrap();
        let e8: Position = "e8".parse().unwrap();
        assert_eq!(board.piece_at(d1), piece(Color::White, Role::Queen));
        assert_eq!(board.piece_at(e8), piece(Color::Black, Role::King));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut board = Board::new();
        board.move_piece(Position::new(6, 4), Position::new(4, 4));
        board.set_piece(Position::new(3, 3), piece(Color::Black, Role::Queen));

        board.initialize();
        let once = board.clone();
        board.initialize();

        assert_eq!(board, once);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_off_board_reads_empty_and_writes_ignored() {
        let mut board = Board::new();
        let outside = Position::new(8, 0);

        board.set_piece(outside, piece(Color::White, Role::Queen));

        assert_eq!(board.piece_at(outside), None);
        assert!(board.is_empty(outside));
        assert!(!board.is_valid_position(outside));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_move_piece_relocates_without_checks() {
        let mut board = Board::new();
        let from = Position::new(7, 0);
        let to = Position::new(0, 0);

        board.move_piece(from, to);

        assert!(board.is_empty(from));
        assert_eq!(board.piece_at(to), piece(Color::White, Role::Rook));
    }

    #[test]
    fn test_move_piece_off_board_is_ignored() {
        let mut board = Board::new();
        board.move_piece(Position::new(7, 0), Position::new(7, 8));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_placement_roundtrip_of_start() {
        let board = Board::from_placement(START).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.placement(), START);
    }

    #[test]
    fn test_placement_sparse() {
        let board = Board::from_placement("8/8/8/3k4/4K3/8/8/8").unwrap();
        assert_eq!(board.pieces().count(), 2);
        assert_eq!(
            board.piece_at("e4".parse().unwrap()),
            piece(Color::White, Role::King)
        );
        assert_eq!(
            board.piece_at("d5".parse().unwrap()),
            piece(Color::Black, Role::King)
        );
    }

    #[test]
    fn test_placement_errors() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(PlacementError::RankCount(3))
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7x"),
            Err(PlacementError::Piece('x'))
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7"),
            Err(PlacementError::RankLength { rank: 1, squares: 7 })
        );
        assert_eq!(
            Board::from_placement("ppppppppp/8/8/8/8/8/8/8"),
            Err(PlacementError::RankLength { rank: 8, squares: 9 })
        );
    }

    #[test]
    fn test_placement_skip_counts_are_one_to_eight() {
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/08"),
            Err(PlacementError::Skip('0'))
        );
        assert_eq!(
            Board::from_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::Skip('9'))
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/1K6").map(|b| b.pieces().count()),
            Ok(1)
        );
    }
}
