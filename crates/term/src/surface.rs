//! The seam between the game loop and whatever displays it.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::core::Scene;

/// Input source and output sink for the game loop.
///
/// Implemented by [`crate::TerminalRenderer`] for real terminals; tests
/// provide scripted implementations.
pub trait Surface {
    /// Next pending key press, or `None` without blocking.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;

    /// Replace the visible frame with `scene` and flush.
    fn draw(&mut self, scene: &Scene) -> Result<()>;

    /// Block for the scheduled delay before the next iteration.
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
