//! `pathfind graph` command - single-source shortest paths

use std::time::Instant;

use serde_json::json;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records};
use pathfind_core::error::Result;
use pathfind_core::format::{
    format_path, format_shortest_paths, path_records, shortest_paths_records,
};
use pathfind_core::graph::{dijkstra_shortest_paths_with_interrupt, load_graph, ShortestPaths};

/// Execute the graph command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let start = Instant::now();
    let graph = load_graph(&args.file)?;
    let source = args.source.unwrap_or(ctx.config.graph.source);

    let paths = dijkstra_shortest_paths_with_interrupt(&graph, source, ctx.interrupt_flag())?;
    tracing::debug!(
        source,
        reachable = (0..paths.num_vertices())
            .filter(|&v| paths.is_reachable(v))
            .count(),
        elapsed = ?start.elapsed(),
        "shortest paths computed"
    );

    match args.to {
        Some(destination) => output_path(ctx, &paths, destination),
        None => output_all(ctx, &paths),
    }
}

fn output_path(ctx: &CommandContext, paths: &ShortestPaths, destination: usize) -> Result<()> {
    let path = paths.path_to(destination)?;

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&path) },
        human => {
            match path.total_cost {
                Some(cost) => print!("{}", format_path(&path.vertices, cost)),
                None => println!(
                    "No path exists from {} to {}",
                    path.source, path.destination
                ),
            }
        },
        records => { print_records(&path_records(&path, paths)); }
    )
}

fn output_all(ctx: &CommandContext, paths: &ShortestPaths) -> Result<()> {
    let all = paths.all_paths()?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "shortest_paths": paths,
                "paths": all,
            }))
        },
        human => { print!("{}", format_shortest_paths(&all)); },
        records => { print_records(&shortest_paths_records(paths)); }
    )
}
