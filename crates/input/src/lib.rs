//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values and detects the
//! Ctrl-C interrupt that raw mode turns into an ordinary key press.

pub mod map;

pub use tui_pong_types as types;

pub use map::{is_interrupt, map_key};
