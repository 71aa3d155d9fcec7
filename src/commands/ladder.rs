//! `pathfind ladder` command - shortest word ladder

use crate::cli::LadderArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records};
use pathfind_core::error::Result;
use pathfind_core::format::{format_word_ladder, ladder_records};
use pathfind_core::ladder::{
    generate_word_ladder_with_interrupt, Dictionary, LadderResult, RejectionReason,
};
use pathfind_core::{bail_invalid, bail_usage};

fn check_word(word: &str) -> Result<()> {
    if word.is_empty() {
        bail_usage!("words must not be empty");
    }
    if word.chars().any(char::is_whitespace) {
        bail_invalid!("word", format!("'{}' contains whitespace", word));
    }
    Ok(())
}

/// Execute the ladder command
pub fn execute(ctx: &CommandContext, args: &LadderArgs) -> Result<()> {
    check_word(&args.start)?;
    check_word(&args.end)?;

    let dictionary = Dictionary::load(ctx.dictionary_path(args.dict.as_deref()))?;
    let result = generate_word_ladder_with_interrupt(
        &args.start,
        &args.end,
        &dictionary,
        ctx.interrupt_flag(),
    )?;

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&result) },
        human => { print!("{}", format_human(&result)); },
        records => { print_records(&ladder_records(&result)); }
    )
}

/// A ladder, or why there is none. An exhausted search also gets the
/// not-found line.
fn format_human(result: &LadderResult) -> String {
    match &result.rejection {
        Some(rejection) if rejection.reason == RejectionReason::NoLadder => {
            format!("{}\n{}", rejection, format_word_ladder(&result.words))
        }
        Some(rejection) => format!("{}\n", rejection),
        None => format_word_ladder(&result.words),
    }
}
