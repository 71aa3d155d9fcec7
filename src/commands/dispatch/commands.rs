//! Command implementations for all pathfind commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use pathfind_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Graph(args) => crate::commands::graph::execute(ctx, args),
            Commands::Ladder(args) => crate::commands::ladder::execute(ctx, args),
            Commands::Distance(args) => crate::commands::distance::execute(ctx, args),
            Commands::Verify(args) => crate::commands::verify::execute(ctx, args),
        };

        tracing::debug!(
            command = self.name(),
            ok = result.is_ok(),
            elapsed = ?ctx.start.elapsed(),
            "command finished"
        );
        result
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Graph(_) => "graph",
            Commands::Ladder(_) => "ladder",
            Commands::Distance(_) => "distance",
            Commands::Verify(_) => "verify",
        }
    }
}
