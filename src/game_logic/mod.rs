mod game;
mod session;
mod validator;

pub use game::{Game, GameError, Outcome};
pub use session::Match;
pub use validator::{IllegalMove, MoveValidator};
