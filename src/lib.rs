//! TUI Pong (workspace facade crate).
//!
//! Re-exports the member crates as `tui_pong::{core,input,term,types}` and
//! hosts the [`driver`] loop that ties them together.

pub mod driver;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
