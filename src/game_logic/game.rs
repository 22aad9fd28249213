use log::{debug, info};
use shakmaty::{ByColor, Color};
use thiserror::Error;

use super::{IllegalMove, MoveValidator};
use crate::game_state::{Board, Move};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The losing side resigned.
    Resignation { winner: Color },
}

impl Outcome {
    #[inline]
    pub const fn winner(self) -> Color {
        match self {
            Outcome::Resignation { winner } => winner,
        }
    }
}

/// Error returned when a game refuses an action.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error("the game is already over")]
    GameOver,
}

/// A single game between two named players.
///
/// Owns the board, tracks whose turn it is and keeps an append-only move
/// history. White moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    players: ByColor<String>,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Starts a game from the standard opening position.
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self::from_board(Board::new(), Color::White, white, black)
    }

    /// Starts a game from an arbitrary board.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        white: impl Into<String>,
        black: impl Into<String>,
    ) -> Self {
        Self {
            board,
            side_to_move,
            players: ByColor {
                white: white.into(),
                black: black.into(),
            },
            history: Vec::new(),
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn player(&self, color: Color) -> &str {
        color.fold_wb(&self.players.white, &self.players.black)
    }

    /// Name of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &str {
        self.player(self.side_to_move)
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Name of the winner, once the game is over.
    pub fn winner_name(&self) -> Option<&str> {
        self.outcome.map(|outcome| self.player(outcome.winner()))
    }

    /// Validator bound to the current board.
    #[inline]
    pub fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.board)
    }

    /// Validates and applies a move for the side to move.
    ///
    /// On success the move is appended to the history and the turn passes.
    /// On failure nothing changes and the same side must move again.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.validator().validate_move(mv, self.side_to_move)?;

        self.board.move_piece(mv.from, mv.to);
        self.history.push(mv);
        debug!("{} played {mv}", self.current_player());
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// The side to move resigns, handing the win to the opponent.
    pub fn resign(&mut self) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let outcome = Outcome::Resignation {
            winner: !self.side_to_move,
        };
        info!(
            "{} resigned after {} move(s), {} wins",
            self.current_player(),
            self.history.len(),
            self.player(outcome.winner())
        );
        self.outcome = Some(outcome);
        Ok(outcome)
    }
}
