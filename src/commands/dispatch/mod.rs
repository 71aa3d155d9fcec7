//! Command dispatch logic for pathfind

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = PathfindConfig::load(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start, install_interrupt_handler());

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Flag set by Ctrl-C, polled by the long-running searches
fn install_interrupt_handler() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        debug!(error = %e, "failed to install interrupt handler");
    }

    interrupted
}
