use std::io::{self, Write};

use crate::GameDisplay;
use crate::game_state::{BOARD_SIZE, Board, Move, Position};

/// Text board display for a terminal or any other writer.
///
/// Rank 8 is drawn on top; white pieces are uppercase letters, black pieces
/// lowercase, empty squares `.`.
#[derive(Debug, Default)]
pub struct TerminalDisplay<W> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl<W: Write> GameDisplay for TerminalDisplay<W> {
    type Error = DisplayError;

    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error> {
        render_board(&mut self.out, board)
    }

    fn show_message(&mut self, message: &str) -> Result<(), Self::Error> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    fn show_history(&mut self, history: &[Move]) -> Result<(), Self::Error> {
        render_history(&mut self.out, history)
    }
}

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board to any writer. Extracted for testability.
fn render_board(w: &mut impl Write, board: &Board) -> Result<(), DisplayError> {
    writeln!(w)?;
    writeln!(w, "{FILE_LABELS}")?;
    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        write!(w, "{rank} ")?;
        for col in 0..BOARD_SIZE {
            let cell = board
                .piece_at(Position::new(row, col))
                .map_or('.', |piece| piece.char());
            write!(w, "{cell} ")?;
        }
        writeln!(w, "{rank}")?;
    }
    writeln!(w, "{FILE_LABELS}")?;
    w.flush()?;
    Ok(())
}

fn render_history(w: &mut impl Write, history: &[Move]) -> Result<(), DisplayError> {
    writeln!(w)?;
    writeln!(w, "=== MOVE HISTORY ===")?;
    if history.is_empty() {
        writeln!(w, "No moves were made.")?;
    }
    for (number, mv) in history.iter().enumerate() {
        writeln!(w, "{}. {mv}", number + 1)?;
    }
    w.flush()?;
    Ok(())
}
