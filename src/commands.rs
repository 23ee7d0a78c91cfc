//! Quit commands — the words that end a session.

/// Words that end the session loop, matched case-insensitively after trimming.
const QUIT_COMMANDS: [&str; 4] = ["exit", "quit", "stop", "sortir"];

/// Whether `input` is a quit command.
///
/// Only exact matches count; "quitter" or "please stop" pass through to the
/// mirror like any other text.
pub fn is_quit(input: &str) -> bool {
    let cleaned = input.trim().to_lowercase();
    QUIT_COMMANDS.iter().any(|cmd| *cmd == cleaned)
}
