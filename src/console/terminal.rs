use std::io::{self, BufRead, Write};

use log::{debug, info};
use shakmaty::Color;
use thiserror::Error;

use crate::game_logic::{Game, Match};
use crate::game_state::Move;
use crate::{GameDisplay, PlayerInput};

/// Typed instead of a move to give up the current game.
pub const RESIGN_COMMAND: &str = "resign";

/// Line-based player input over any reader, echoing prompts to a writer.
///
/// The binary wires this to stdin/stdout; the session owns it for its
/// whole lifetime and drops it when the session ends.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

/// Error type for terminal input operations.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read from terminal: {0}")]
    Io(#[from] io::Error),
}

impl<R: BufRead, W: Write> PlayerInput for LineInput<R, W> {
    type Error = InputError;

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::Error> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Underlying failure of a [`PlayerInput`] or [`GameDisplay`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Error that aborts a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read player input: {0}")]
    Input(#[source] BoxedError),
    #[error("failed to update display: {0}")]
    Display(#[source] BoxedError),
}

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games started, including one cut short by closed input.
    pub games_played: usize,
    /// Winner of each finished game, in order.
    pub winners: Vec<String>,
}

/// Runs an interactive two-player session until the players stop or the
/// input is exhausted.
///
/// Reads both names, then plays games back to back. After each game the
/// move history is shown and the players are offered a rematch; a black
/// winner takes white in a rematch between the same players.
pub fn run_session<I, D>(input: &mut I, display: &mut D) -> Result<SessionSummary, SessionError>
where
    I: PlayerInput,
    D: GameDisplay,
{
    let mut console = Console { input, display };
    let mut summary = SessionSummary::default();

    console.message("=== CHESS ===")?;
    if let Some((white, black)) = console.read_players()? {
        play_match(&mut console, Match::new(white, black), &mut summary)?;
    }

    info!(
        "session over after {} game(s): {:?}",
        summary.games_played, summary.winners
    );
    console.message("\nThanks for playing!")?;
    Ok(summary)
}

/// Plays games between seated players until they stop or the input runs out.
fn play_match<I, D>(
    console: &mut Console<'_, I, D>,
    mut chess_match: Match,
    summary: &mut SessionSummary,
) -> Result<(), SessionError>
where
    I: PlayerInput,
    D: GameDisplay,
{
    loop {
        let mut game = chess_match.new_game();
        let finished = console.play_game(&mut game)?;

        chess_match.record_result(&game);
        summary.games_played += 1;
        if let Some(winner) = game.winner_name() {
            summary.winners.push(winner.to_owned());
        }
        console.history(game.history())?;

        if !finished || console.ask_yes_no("\nPlay another game? (yes/no): ")? != Some(true) {
            break;
        }
        match console.ask_yes_no("\nSame players? (yes/no): ")? {
            Some(true) => {
                if chess_match.rematch_with_same_players() {
                    console.message(&format!(
                        "\nColors swapped! {} (winner) now plays white.",
                        chess_match.player(Color::White)
                    ))?;
                }
            }
            Some(false) => {
                let Some((white, black)) = console.read_players()? else {
                    break;
                };
                chess_match.rematch_with_new_players(white, black);
            }
            None => break,
        }
    }
    Ok(())
}

/// Name used in prompts for a side.
fn color_name(color: Color) -> &'static str {
    color.fold_wb("white", "black")
}

/// The explicit I/O context of one session.
struct Console<'a, I, D> {
    input: &'a mut I,
    display: &'a mut D,
}

impl<I: PlayerInput, D: GameDisplay> Console<'_, I, D> {
    fn read(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        self.input
            .read_line(prompt)
            .map_err(|e| SessionError::Input(Box::new(e)))
    }

    fn message(&mut self, message: &str) -> Result<(), SessionError> {
        self.display
            .show_message(message)
            .map_err(|e| SessionError::Display(Box::new(e)))
    }

    fn error(&mut self, error: &impl std::fmt::Display) -> Result<(), SessionError> {
        self.message(&format!("ERROR: {error}"))
    }

    fn history(&mut self, history: &[Move]) -> Result<(), SessionError> {
        self.display
            .show_history(history)
            .map_err(|e| SessionError::Display(Box::new(e)))
    }

    /// Reads a non-empty name, re-prompting on blank answers.
    fn read_name(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        loop {
            let Some(line) = self.read(prompt)? else {
                return Ok(None);
            };
            let name = line.trim();
            if !name.is_empty() {
                return Ok(Some(name.to_owned()));
            }
            self.error(&"the name cannot be empty")?;
        }
    }

    fn read_players(&mut self) -> Result<Option<(String, String)>, SessionError> {
        let Some(white) = self.read_name("\nEnter the name of player 1 (white): ")? else {
            return Ok(None);
        };
        let Some(black) = self.read_name("Enter the name of player 2 (black): ")? else {
            return Ok(None);
        };
        self.message("\nRegistered players:")?;
        self.message(&format!("{white} (white)"))?;
        self.message(&format!("{black} (black)"))?;
        Ok(Some((white, black)))
    }

    /// Accepts yes/y/no/n in any case, re-prompting on anything else.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>, SessionError> {
        loop {
            let Some(line) = self.read(prompt)? else {
                return Ok(None);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => self.error(&"please answer 'yes' or 'no'")?,
            }
        }
    }

    /// Plays until someone resigns. Returns `false` if the input ran out first.
    fn play_game(&mut self, game: &mut Game) -> Result<bool, SessionError> {
        while !game.is_over() {
            self.display
                .show_board(game.board())
                .map_err(|e| SessionError::Display(Box::new(e)))?;

            let prompt = format!(
                "\n{} ({}), move (e.g. 'e2 e4') or '{RESIGN_COMMAND}': ",
                game.current_player(),
                color_name(game.side_to_move())
            );
            let Some(line) = self.read(&prompt)? else {
                debug!("input closed mid-game");
                return Ok(false);
            };
            let line = line.trim();

            if line.eq_ignore_ascii_case(RESIGN_COMMAND) {
                let resigning = game.current_player().to_owned();
                match game.resign() {
                    Ok(_) => self.message(&format!("\n{resigning} resigned the game."))?,
                    Err(e) => self.error(&e)?,
                }
                continue;
            }

            // Invalid input leaves the turn with the same player.
            match line.parse::<Move>() {
                Ok(mv) => {
                    if let Err(e) = game.play(mv) {
                        self.error(&e)?;
                    }
                }
                Err(e) => self.error(&e)?,
            }
        }
        Ok(true)
    }
}
