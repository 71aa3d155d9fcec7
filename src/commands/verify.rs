//! `pathfind verify` command - built-in word ladder checks

use crate::cli::VerifyArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records};
use pathfind_core::error::{PathfindError, Result};
use pathfind_core::format::{format_verify_report, verify_records};
use pathfind_core::ladder::{verify_word_ladders, Dictionary};

/// Execute the verify command. Fails when any case fails.
pub fn execute(ctx: &CommandContext, args: &VerifyArgs) -> Result<()> {
    let dictionary = Dictionary::load(ctx.dictionary_path(args.dict.as_deref()))?;
    let outcomes = verify_word_ladders(&dictionary);

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&outcomes) },
        human => {
            if ctx.cli.quiet {
                let passed = outcomes.iter().filter(|o| o.passed).count();
                println!("{}/{} cases passed", passed, outcomes.len());
            } else {
                print!("{}", format_verify_report(&outcomes));
            }
        },
        records => { print_records(&verify_records(&outcomes)); }
    )?;

    let failed = outcomes.iter().filter(|o| !o.passed).count();
    if failed > 0 {
        return Err(PathfindError::Other(format!(
            "{} of {} verify cases failed",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}
