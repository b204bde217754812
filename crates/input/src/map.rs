//! Key mapping from terminal events to game commands.

use crate::types::{Command, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command.
///
/// `R` only restarts once the match is over; in any other phase it maps to
/// [`Command::None`].
pub fn map_key(key: KeyEvent, phase: Phase) -> Command {
    if is_interrupt(key) {
        return Command::None;
    }

    match key.code {
        // Left paddle
        KeyCode::Char('w') | KeyCode::Char('W') => Command::MoveLeftPaddleUp,
        KeyCode::Char('s') | KeyCode::Char('S') => Command::MoveLeftPaddleDown,

        // Right paddle
        KeyCode::Up => Command::MoveRightPaddleUp,
        KeyCode::Down => Command::MoveRightPaddleDown,

        KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,

        KeyCode::Char('r') | KeyCode::Char('R') if phase == Phase::GameOver => Command::Restart,

        _ => Command::None,
    }
}

/// Ctrl-C. Raw mode delivers it as a key event rather than SIGINT.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
