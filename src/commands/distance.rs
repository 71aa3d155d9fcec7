//! `pathfind distance` command - edit distance between two words

use serde::Serialize;

use crate::cli::DistanceArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records};
use pathfind_core::error::Result;
use pathfind_core::format::format_records_header;
use pathfind_core::ladder::{edit_distance, edit_distance_within, is_adjacent};

#[derive(Debug, Serialize)]
struct DistanceReport<'a> {
    a: &'a str,
    b: &'a str,
    distance: usize,
    adjacent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    within: Option<bool>,
}

/// Execute the distance command
pub fn execute(ctx: &CommandContext, args: &DistanceArgs) -> Result<()> {
    let report = DistanceReport {
        a: &args.a,
        b: &args.b,
        distance: edit_distance(&args.a, &args.b),
        adjacent: is_adjacent(&args.a, &args.b),
        max_distance: args.within,
        within: args.within.map(|d| edit_distance_within(&args.a, &args.b, d)),
    };

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&report) },
        human => {
            println!("Edit distance is {}", report.distance);
            println!("Adjacent: {}", if report.adjacent { "yes" } else { "no" });
            if let (Some(d), Some(within)) = (report.max_distance, report.within) {
                println!("Within {}: {}", d, if within { "yes" } else { "no" });
            }
        },
        records => {
            let mut fields = vec![
                ("a", report.a.to_string()),
                ("b", report.b.to_string()),
                ("distance", report.distance.to_string()),
                ("adjacent", report.adjacent.to_string()),
            ];
            if let (Some(d), Some(within)) = (report.max_distance, report.within) {
                fields.push(("max", d.to_string()));
                fields.push(("within", within.to_string()));
            }
            print_records(&[format_records_header("distance", &fields)]);
        }
    )
}
