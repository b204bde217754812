//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a [`core::Scene`] into a simple framebuffer that is flushed to
//! the terminal with crossterm, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal I/O
//! - Guarantee the terminal is restored on every exit path
//! - Hide the terminal behind [`Surface`] so the game loop can be tested headless

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, Weight};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::Surface;
