//! Command trait and context for dispatching commands

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a PathfindConfig,
    pub start: Instant,
    interrupted: Arc<AtomicBool>,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: &'a PathfindConfig,
        start: Instant,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        Self {
            cli,
            config,
            start,
            interrupted,
        }
    }

    /// Set once the user presses Ctrl-C
    pub fn interrupt_flag(&self) -> &AtomicBool {
        &self.interrupted
    }

    /// Dictionary from the command line, else from config
    pub fn dictionary_path<'p>(&'p self, explicit: Option<&'p Path>) -> &'p Path {
        explicit.unwrap_or(&self.config.ladder.dictionary)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathfind {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths in weighted graphs and word ladders.");
        println!();
        println!("Run `pathfind --help` for usage information.");
        Ok(())
    }
}
