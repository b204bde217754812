//! Terminal Pong runner (default binary).
//!
//! Two players share the keyboard: W/S move the left paddle, the arrow keys
//! move the right one. It uses crossterm for input and a framebuffer-based
//! renderer.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use env_logger::Env;

use tui_pong::driver::{run, Outcome};
use tui_pong::term::TerminalRenderer;

fn main() -> Result<()> {
    // Off by default: log lines would land on top of the game screen.
    // Use e.g. `RUST_LOG=debug tui-pong 2>pong.log`.
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let interrupted = Arc::new(AtomicBool::new(false));
    register_signals(&interrupted)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &interrupted);

    // Always try to restore terminal state.
    let restored = term.exit();
    let outcome = result?;
    restored?;

    if outcome == Outcome::Interrupted {
        println!("\nGame ended by user");
    }
    Ok(())
}

#[cfg(unix)]
fn register_signals(flag: &Arc<AtomicBool>) -> Result<()> {
    use anyhow::Context;
    use signal_hook::consts::{SIGINT, SIGTERM};

    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(flag))
            .with_context(|| format!("failed to register handler for signal {}", signal))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn register_signals(_flag: &Arc<AtomicBool>) -> Result<()> {
    Ok(())
}
