//! Shared output helpers for commands

pub use crate::output_by_format_result;

use pathfind_core::error::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print records lines on stdout
pub fn print_records(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
