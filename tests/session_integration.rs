use console_chess::console::{ScriptedInput, SessionSummary, TerminalDisplay, run_session};

/// Helper: run a whole session from a script, returning the summary, the
/// rendered transcript and the input (for prompt inspection).
fn play(script: &str) -> (SessionSummary, String, ScriptedInput) {
    let mut input = ScriptedInput::from_script(script);
    let mut display = TerminalDisplay::new(Vec::new());
    let summary = run_session(&mut input, &mut display).expect("session should succeed");
    let transcript = String::from_utf8(display.into_inner()).expect("valid UTF-8");
    (summary, transcript, input)
}

/// Helper: prompts that asked a given player to move.
fn move_prompts<'a>(input: &'a ScriptedInput, player: &'a str) -> impl Iterator<Item = &'a String> {
    input
        .prompts()
        .iter()
        .filter(move |p| p.starts_with(&format!("\n{player} (")))
}

// ---------------------------------------------------------------
// Single game
// ---------------------------------------------------------------

#[test]
fn moves_are_recorded_in_history() {
    let (summary, transcript, _) = play(
        "Anna\nBiel\n\
         e2 e4\ne7 e5\ng1 f3\n\
         resign\n\
         no",
    );

    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.winners, ["Anna"]);
    assert!(transcript.contains("=== MOVE HISTORY ===\n1. e2 e4\n2. e7 e5\n3. g1 f3\n"));
    assert!(transcript.contains("Biel resigned the game."));
    assert!(transcript.contains("Thanks for playing!"));
}

#[test]
fn illegal_move_keeps_turn() {
    let (_, transcript, input) = play(
        "Anna\nBiel\n\
         a1 a5\ne2 e4\n\
         resign\n\
         no",
    );

    assert!(transcript.contains("ERROR: there is a piece in the way"));
    // Anna was asked twice: once for the rejected move, once for e2 e4.
    assert_eq!(move_prompts(&input, "Anna").count(), 2);
    assert!(move_prompts(&input, "Biel").all(|p| p.contains("(black)")));
    assert!(transcript.contains("=== MOVE HISTORY ===\n1. e2 e4\n\n"));
}

#[test]
fn malformed_input_is_reported() {
    let (_, transcript, _) = play(
        "Anna\nBiel\n\
         e2e4\nz9 e4\ne7 e5\n\
         resign\n\
         no",
    );

    assert!(transcript.contains("ERROR: expected two squares like 'e2 e4', found 1 token(s)"));
    assert!(transcript.contains("ERROR: invalid coordinates 'z9'"));
    assert!(transcript.contains("ERROR: that piece belongs to your opponent"));
    assert!(transcript.contains("No moves were made."));
}

#[test]
fn board_is_redrawn_after_each_move() {
    let (_, transcript, _) = play("Anna\nBiel\ne2 e4\nresign\nno");

    assert!(transcript.contains("4 . . . . P . . . 4"));
    assert_eq!(transcript.matches("  a b c d e f g h").count(), 4);
}

// ---------------------------------------------------------------
// Rematches
// ---------------------------------------------------------------

#[test]
fn black_winner_plays_white_in_rematch() {
    let (summary, transcript, input) = play(
        "Anna\nBiel\n\
         resign\n\
         yes\nyes\n\
         resign\n\
         no",
    );

    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.winners, ["Biel", "Anna"]);
    assert!(transcript.contains("Colors swapped! Biel (winner) now plays white."));
    assert!(move_prompts(&input, "Biel").any(|p| p.contains("(white)")));
}

#[test]
fn white_winner_keeps_colors() {
    let (summary, transcript, input) = play(
        "Anna\nBiel\n\
         e2 e4\nresign\n\
         y\ny\n\
         resign\n\
         n",
    );

    assert_eq!(summary.winners, ["Anna", "Biel"]);
    assert!(!transcript.contains("Colors swapped!"));
    assert!(move_prompts(&input, "Anna").all(|p| p.contains("(white)")));
}

#[test]
fn new_players_start_fresh() {
    let (summary, transcript, input) = play(
        "Anna\nBiel\n\
         resign\n\
         yes\nno\n\
         Carla\nDani\n\
         resign\n\
         no",
    );

    assert_eq!(summary.winners, ["Biel", "Dani"]);
    assert!(transcript.contains("Carla (white)"));
    assert!(!transcript.contains("Colors swapped!"));
    assert_eq!(move_prompts(&input, "Carla").count(), 1);
}

#[test]
fn rematch_resets_board_and_history() {
    let (_, transcript, _) = play(
        "Anna\nBiel\n\
         e2 e4\nresign\n\
         yes\nyes\n\
         resign\n\
         no",
    );

    // Second game's history is empty even though the first had a move.
    let second = transcript
        .rsplit("=== MOVE HISTORY ===")
        .next()
        .expect("two histories");
    assert!(second.contains("No moves were made."));
    // The second game opens on a fresh board.
    let last_board = transcript
        .rsplit("8 r n b q k b n r 8")
        .next()
        .expect("board drawn");
    assert!(last_board.contains("2 P P P P P P P P 2"));
}

#[test]
fn closed_input_ends_session_cleanly() {
    let (summary, transcript, input) = play("Anna\nBiel\nresign\nyes");

    assert_eq!(summary.games_played, 1);
    assert_eq!(input.remaining(), 0);
    assert!(transcript.contains("Thanks for playing!"));
}
