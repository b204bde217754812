//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 80 columns (indexed 0-79)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Paddles**: 4 rows tall, left at column 2, right at column 77
//!
//! # Timing Constants
//!
//! The tick interval is a floating-point number of seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DELAY_SECS` | 0.05 | Tick interval at the start of every rally |
//! | `MIN_DELAY_SECS` | 0.02 | Fastest allowed tick interval |
//! | `SPEEDUP_FACTOR` | 0.97 | Multiplier applied on every paddle hit |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Command, Side, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(BOARD_WIDTH, 80);
//! assert_eq!(BOARD_HEIGHT, 24);
//!
//! assert_eq!(Command::MoveRightPaddleDown.paddle_move(), Some((Side::Right, 1)));
//! assert_eq!(Side::Left.as_str(), "Left");
//! ```

/// Board width in cells (80 columns)
pub const BOARD_WIDTH: i16 = 80;

/// Board height in cells (24 rows)
pub const BOARD_HEIGHT: i16 = 24;

/// Paddle height in rows
pub const PADDLE_HEIGHT: i16 = 4;

/// Column occupied by the left paddle
pub const LEFT_PADDLE_X: i16 = 2;

/// Column occupied by the right paddle
pub const RIGHT_PADDLE_X: i16 = BOARD_WIDTH - 3;

/// Points needed to win a match
pub const WIN_SCORE: u32 = 5;

/// Tick interval at the start of a rally (seconds)
pub const BASE_DELAY_SECS: f64 = 0.05;

/// Lower bound for the tick interval (seconds)
pub const MIN_DELAY_SECS: f64 = 0.02;

/// Tick interval multiplier applied on each paddle hit
pub const SPEEDUP_FACTOR: f64 = 0.97;

/// Width of the rendered scene in terminal columns.
pub const SCENE_WIDTH: u16 = BOARD_WIDTH as u16;

/// Height of the rendered scene: the board plus one legend row.
pub const SCENE_HEIGHT: u16 = BOARD_HEIGHT as u16 + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_geometry_defaults() {
        assert_eq!(BOARD_WIDTH, 80);
        assert_eq!(BOARD_HEIGHT, 24);
        assert_eq!(PADDLE_HEIGHT, 4);
        assert_eq!(LEFT_PADDLE_X, 2);
        assert_eq!(RIGHT_PADDLE_X, 77);
        assert_eq!(SCENE_HEIGHT, 25);
    }

    #[test]
    fn delay_bounds_are_ordered() {
        assert!(MIN_DELAY_SECS < BASE_DELAY_SECS);
        assert!(SPEEDUP_FACTOR < 1.0);
        assert_eq!(WIN_SCORE, 5);
    }

    #[test]
    fn paddle_move_only_for_movement_commands() {
        assert_eq!(Command::MoveLeftPaddleUp.paddle_move(), Some((Side::Left, -1)));
        assert_eq!(Command::MoveLeftPaddleDown.paddle_move(), Some((Side::Left, 1)));
        assert_eq!(Command::MoveRightPaddleUp.paddle_move(), Some((Side::Right, -1)));
        assert_eq!(Command::MoveRightPaddleDown.paddle_move(), Some((Side::Right, 1)));
        for cmd in [Command::TogglePause, Command::Restart, Command::Quit, Command::None] {
            assert_eq!(cmd.paddle_move(), None);
        }
    }
}

/// Commands understood by the game engine
///
/// Raw key codes are translated into these before reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the left paddle one row up
    MoveLeftPaddleUp,
    /// Move the left paddle one row down
    MoveLeftPaddleDown,
    /// Move the right paddle one row up
    MoveRightPaddleUp,
    /// Move the right paddle one row down
    MoveRightPaddleDown,
    /// Toggle pause state (ignored once the match is over)
    TogglePause,
    /// Start a fresh match (only honored when the match is over)
    Restart,
    /// Leave the game loop
    Quit,
    /// No input this tick
    None,
}

impl Command {
    /// Paddle and row delta for movement commands.
    pub fn paddle_move(&self) -> Option<(Side, i16)> {
        match self {
            Command::MoveLeftPaddleUp => Some((Side::Left, -1)),
            Command::MoveLeftPaddleDown => Some((Side::Left, 1)),
            Command::MoveRightPaddleUp => Some((Side::Right, -1)),
            Command::MoveRightPaddleDown => Some((Side::Right, 1)),
            _ => None,
        }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Display name used in the game over banner
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Process-level game phase
///
/// - **Active**: ball in play, paddles respond to input
/// - **Paused**: simulation frozen until pause is toggled again
/// - **GameOver**: a player reached [`WIN_SCORE`]; waiting for restart or quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Active,
    Paused,
    GameOver,
}

/// What the driver loop should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
