//! Text console front end: terminal adapters, rendering and the session loop.

mod display;
mod script;
mod terminal;

pub use display::{DisplayError, TerminalDisplay};
pub use script::ScriptedInput;
pub use terminal::{
    BoxedError, InputError, LineInput, RESIGN_COMMAND, SessionError, SessionSummary, run_session,
};
