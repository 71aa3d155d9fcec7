//! Format output dispatch helpers
//!
//! Provides macros to eliminate repetitive format match blocks.

/// Macro for format dispatch that automatically wraps result handling.
/// Use when the json branch returns Result and human/records return ().
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&result) },
///     human => { print!("{}", format_path(&path, cost)); },
///     records => { print_records(&lines); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
