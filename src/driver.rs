//! Game loop.
//!
//! One iteration, strictly in order: poll at most one key without blocking,
//! translate it, apply it, advance one tick, draw, then wait for the state's
//! current tick interval.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use log::info;

use crate::core::GameState;
use crate::input::{is_interrupt, map_key};
use crate::term::Surface;
use crate::types::{Command, Flow};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player pressed quit.
    Quit,
    /// Ctrl-C or a termination signal.
    Interrupted,
}

/// Play a fresh match until quit or interrupt.
pub fn run<S: Surface>(surface: &mut S, interrupted: &AtomicBool) -> Result<Outcome> {
    let mut game = GameState::new();
    run_game(surface, &mut game, interrupted)
}

/// Drive an existing game state until quit or interrupt.
pub fn run_game<S: Surface>(
    surface: &mut S,
    game: &mut GameState,
    interrupted: &AtomicBool,
) -> Result<Outcome> {
    info!("game loop started");
    loop {
        if interrupted.load(Ordering::Relaxed) {
            info!("interrupted by signal");
            return Ok(Outcome::Interrupted);
        }

        let command = match surface.poll_key()? {
            Some(key) if is_interrupt(key) => {
                info!("interrupted by Ctrl-C");
                return Ok(Outcome::Interrupted);
            }
            Some(key) => map_key(key, game.phase()),
            None => Command::None,
        };

        if game.handle_input(command) == Flow::Quit {
            info!(
                "quit at {} | {}",
                game.left_score(),
                game.right_score()
            );
            return Ok(Outcome::Quit);
        }

        game.update();
        surface.draw(&game.render_description())?;
        surface.wait(game.tick_delay());
    }
}
