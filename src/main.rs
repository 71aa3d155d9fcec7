//! Pathfind - shortest paths in weighted graphs and word ladders
//!
//! Runs Dijkstra over graph files and breadth-first word ladder search over
//! dictionary files, printing results as human text, JSON or records.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::parse::parse_format;
use cli::{Cli, OutputFormat};
use pathfind_core::error::{ExitCode as PathfindExitCode, PathfindError};
use pathfind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathfindExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print a failed command's error and turn it into the process exit code
fn report(error: &PathfindError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Handle a clap failure. Help and version go through clap; with JSON output
/// requested, parse errors become a usage error envelope.
fn usage_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || argv_format(env::args().skip(1)) != Some(OutputFormat::Json) {
        err.exit();
    }

    report(&PathfindError::UsageError(err.to_string()), OutputFormat::Json, false)
}

/// The last `--format` value on the raw command line, if it names a format.
///
/// Clap can fail before `Cli.format` exists, so this reads argv directly.
fn argv_format(args: impl IntoIterator<Item = String>) -> Option<OutputFormat> {
    let mut args = args.into_iter();
    let mut format = None;
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(inline) => inline.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if let Some(parsed) = value.and_then(|v| parse_format(&v).ok()) {
            format = Some(parsed);
        }
    }
    format
}
