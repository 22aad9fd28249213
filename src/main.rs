use std::io;
use std::process::ExitCode;

use console_chess::console::{self, LineInput, TerminalDisplay};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Console chess");

    let mut input = LineInput::new(io::stdin().lock(), io::stdout());
    let mut display = TerminalDisplay::new(io::stdout());

    match console::run_session(&mut input, &mut display) {
        Ok(summary) => {
            log::info!("played {} game(s)", summary.games_played);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
