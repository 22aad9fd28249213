use game_state::{Board, Move};

pub mod console;
pub mod game_logic;
pub mod game_state;

/// Trait for reading lines typed by the players.
///
/// Abstracts over the real terminal and scripted inputs, so a session is
/// driven through an explicitly passed input rather than a global reader.
pub trait PlayerInput {
    /// Error type for read failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::Error>;
}

/// Trait for presenting the game to the players.
///
/// Mirrors [`PlayerInput`] on the output side of the session loop.
pub trait GameDisplay {
    /// Error type for display update failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render the current board.
    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error>;

    /// Show a line of text.
    fn show_message(&mut self, message: &str) -> Result<(), Self::Error>;

    /// Show the numbered move history of a finished game.
    fn show_history(&mut self, history: &[Move]) -> Result<(), Self::Error>;
}
