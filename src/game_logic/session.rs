use log::info;
use shakmaty::{ByColor, Color};

use super::Game;

/// A series of games between the same pair of seats.
///
/// Remembers who won the previous game so a winner playing black can be
/// moved to white for the rematch.
#[derive(Debug, Clone)]
pub struct Match {
    players: ByColor<String>,
    last_winner: Option<Color>,
}

impl Match {
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            players: ByColor {
                white: white.into(),
                black: black.into(),
            },
            last_winner: None,
        }
    }

    #[inline]
    pub fn player(&self, color: Color) -> &str {
        color.fold_wb(&self.players.white, &self.players.black)
    }

    /// Name of the previous game's winner, if it had one.
    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.map(|color| self.player(color))
    }

    /// A fresh game on a newly initialized board with an empty history.
    pub fn new_game(&self) -> Game {
        info!(
            "new game: {} (white) vs {} (black)",
            self.players.white, self.players.black
        );
        Game::new(self.players.white.clone(), self.players.black.clone())
    }

    /// Remembers which color won a game played in this match.
    ///
    /// The winner is kept by color and named through the current seating.
    /// An unfinished game clears the previous winner.
    pub fn record_result(&mut self, game: &Game) {
        self.last_winner = game.outcome().map(|outcome| outcome.winner());
    }

    /// Keeps the same pair for the next game.
    ///
    /// If black won the last game the players trade colors so the winner
    /// plays white. Returns whether a swap happened.
    pub fn rematch_with_same_players(&mut self) -> bool {
        if self.last_winner != Some(Color::Black) {
            return false;
        }
        std::mem::swap(&mut self.players.white, &mut self.players.black);
        self.last_winner = Some(Color::White);
        info!("{} won with black and now plays white", self.players.white);
        true
    }

    /// Seats a new pair of players and forgets the previous winner.
    pub fn rematch_with_new_players(&mut self, white: impl Into<String>, black: impl Into<String>) {
        self.players = ByColor {
            white: white.into(),
            black: black.into(),
        };
        self.last_winner = None;
    }
}
