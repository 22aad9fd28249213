use log::debug;
use shakmaty::{Color, Role};
use thiserror::Error;

use crate::game_state::{Board, Move};

/// Why a proposed move was rejected.
///
/// Rejections are ordinary outcomes of player input; the board is never
/// touched when one is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    #[error("position is outside the board")]
    OutOfBounds,
    #[error("there is no piece on that square")]
    NoPieceAtSource,
    #[error("that piece belongs to your opponent")]
    WrongColor,
    #[error("origin and destination are the same square")]
    NullMove,
    #[error("you cannot capture your own pieces")]
    FriendlyFire,
    #[error("invalid pawn move")]
    InvalidPawnMove,
    #[error("the rook only moves in a straight line")]
    RookNotStraight,
    #[error("there is a piece in the way")]
    PathBlocked,
    #[error("the knight moves in an L shape (2+1)")]
    InvalidKnightMove,
    #[error("the bishop only moves diagonally")]
    BishopNotDiagonal,
    #[error("the queen moves in a straight line or diagonally")]
    QueenInvalidDirection,
    #[error("the king only moves one square")]
    KingTooFar,
}

/// Checks proposed moves against the piece-movement rules.
///
/// Borrows the board for its lifetime and never mutates it. Only the shape
/// of a move is judged: there is no notion of check, castling, en passant
/// or promotion.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    board: &'a Board,
}

impl<'a> MoveValidator<'a> {
    #[inline]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Boolean view of [`validate_move`](Self::validate_move).
    #[inline]
    pub fn is_legal(&self, mv: Move, side_to_move: Color) -> bool {
        self.validate_move(mv, side_to_move).is_ok()
    }

    /// Validate `mv` for the player of `side_to_move`.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// bounds, source occupancy, ownership, null move, self-capture,
    /// then the rule for the moving piece's kind.
    pub fn validate_move(&self, mv: Move, side_to_move: Color) -> Result<(), IllegalMove> {
        let verdict = self.check(mv, side_to_move);
        if let Err(reason) = verdict {
            debug!("rejected {mv} for {side_to_move:?}: {reason:?}");
        }
        verdict
    }

    fn check(&self, mv: Move, side_to_move: Color) -> Result<(), IllegalMove> {
        if !self.board.is_valid_position(mv.from) || !self.board.is_valid_position(mv.to) {
            return Err(IllegalMove::OutOfBounds);
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(IllegalMove::NoPieceAtSource)?;
        if piece.color != side_to_move {
            return Err(IllegalMove::WrongColor);
        }
        if mv.from == mv.to {
            return Err(IllegalMove::NullMove);
        }
        if self
            .board
            .piece_at(mv.to)
            .is_some_and(|target| target.color == piece.color)
        {
            return Err(IllegalMove::FriendlyFire);
        }

        match piece.role {
            Role::Pawn => self.check_pawn(mv, piece.color),
            Role::Rook => self.check_rook(mv),
            Role::Knight => check_knight(mv),
            Role::Bishop => self.check_bishop(mv),
            Role::Queen => self.check_queen(mv),
            Role::King => check_king(mv),
        }
    }

    /// Single advance, double advance from the home row, or diagonal capture.
    fn check_pawn(&self, mv: Move, color: Color) -> Result<(), IllegalMove> {
        // White advances toward row 0.
        let direction: i8 = color.fold_wb(-1, 1);
        let home_row = color.fold_wb(6, 1);
        let (dr, dc) = (mv.row_delta(), mv.col_delta());
        let step = i16::from(direction);
        let target = self.board.piece_at(mv.to);

        let single = dc == 0 && dr == step && target.is_none();
        let double = mv.from.row() == home_row
            && dc == 0
            && dr == 2 * step
            && self.board.is_empty(mv.from.offset(direction, 0))
            && target.is_none();
        let capture =
            dc.abs() == 1 && dr == step && target.is_some_and(|victim| victim.color != color);

        if single || double || capture {
            Ok(())
        } else {
            Err(IllegalMove::InvalidPawnMove)
        }
    }

    fn check_rook(&self, mv: Move) -> Result<(), IllegalMove> {
        if !is_straight(mv) {
            return Err(IllegalMove::RookNotStraight);
        }
        self.check_path(mv)
    }

    fn check_bishop(&self, mv: Move) -> Result<(), IllegalMove> {
        if !is_diagonal(mv) {
            return Err(IllegalMove::BishopNotDiagonal);
        }
        self.check_path(mv)
    }

    fn check_queen(&self, mv: Move) -> Result<(), IllegalMove> {
        if is_straight(mv) {
            self.check_rook(mv)
        } else if is_diagonal(mv) {
            self.check_bishop(mv)
        } else {
            Err(IllegalMove::QueenInvalidDirection)
        }
    }

    /// Every square strictly between the endpoints must be empty.
    ///
    /// `mv` must be straight or diagonal, otherwise the walk never meets `to`.
    fn check_path(&self, mv: Move) -> Result<(), IllegalMove> {
        let (step_row, step_col) = (
            mv.row_delta().signum() as i8,
            mv.col_delta().signum() as i8,
        );
        let mut current = mv.from.offset(step_row, step_col);
        while current != mv.to {
            if !self.board.is_empty(current) {
                return Err(IllegalMove::PathBlocked);
            }
            current = current.offset(step_row, step_col);
        }
        Ok(())
    }
}

fn check_knight(mv: Move) -> Result<(), IllegalMove> {
    // Knights jump, so the path is irrelevant.
    match (mv.row_delta().abs(), mv.col_delta().abs()) {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(IllegalMove::InvalidKnightMove),
    }
}

fn check_king(mv: Move) -> Result<(), IllegalMove> {
    if mv.row_delta().abs() <= 1 && mv.col_delta().abs() <= 1 {
        Ok(())
    } else {
        Err(IllegalMove::KingTooFar)
    }
}

#[inline]
fn is_straight(mv: Move) -> bool {
    mv.row_delta() == 0 || mv.col_delta() == 0
}

#[inline]
fn is_diagonal(mv: Move) -> bool {
    mv.row_delta() != 0 && mv.row_delta().abs() == mv.col_delta().abs()
}
