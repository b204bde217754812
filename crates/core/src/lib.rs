//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: The same command sequence always yields the same match
//! - **Testable**: Unit tests cover every rule and scenario
//! - **Portable**: Can run headless, in a terminal, or behind any other surface
//! - **Allocation-free per frame**: [`Scene`] is bounded by `arrayvec`
//!
//! # Module Structure
//!
//! - [`game_state`]: Ball, paddles, scores, pause/game-over flags and tick interval
//! - [`scene`]: Pure draw description of a frame
//!
//! # Game Rules
//!
//! - The ball moves one cell diagonally per tick and bounces off the top and bottom walls
//! - A paddle hit reverses the ball and shortens the tick interval by 3% (floor 20ms)
//! - A ball reaching the left or right edge scores for the opponent and relaunches
//!   from the center; the tick interval returns to 50ms
//! - First player to 5 points wins
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{Command, Flow};
//!
//! let mut game = GameState::new();
//! game.handle_input(Command::MoveLeftPaddleUp);
//! game.update();
//!
//! assert_eq!(game.ball().x, 41);
//! assert_eq!(game.left_paddle().y, 9);
//! assert_eq!(game.handle_input(Command::Quit), Flow::Quit);
//! ```

pub mod game_state;
pub mod scene;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Ball, GameState, Paddle};
pub use scene::{DrawOp, Glyphs, Role, Scene};
