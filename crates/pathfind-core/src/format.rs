//! Output format handling for pathfind
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format, one header line then one line per item
//!
//! Everything here returns strings; printing is left to the CLI.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathfindError;
use crate::graph::types::{Distance, PathResult, ShortestPaths};
use crate::ladder::bfs::LadderResult;
use crate::ladder::verify::VerifyOutcome;

/// Records format version, emitted in every header line
pub const RECORDS_VERSION: u32 = 1;

/// Output format for pathfind commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = PathfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(PathfindError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Vertex sequence followed by its total cost.
///
/// Every vertex is followed by a space, so an empty path prints as a blank
/// line before the cost.
pub fn format_path(vertices: &[usize], total_cost: Distance) -> String {
    let mut out = String::new();
    for v in vertices {
        let _ = write!(out, "{} ", v);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total cost is {}", total_cost);
    out
}

/// Ladder words on one line, or a not-found message when empty
pub fn format_word_ladder<S: AsRef<str>>(words: &[S]) -> String {
    if words.is_empty() {
        return "No word ladder found.\n".to_string();
    }

    let mut out = String::from("Word ladder found: ");
    for word in words {
        let _ = write!(out, "{} ", word.as_ref());
    }
    out.push('\n');
    out
}

/// One line per destination: its path and cost, or that no path exists
pub fn format_shortest_paths(paths: &[PathResult]) -> String {
    let mut out = String::new();
    for path in paths {
        let _ = write!(out, "To vertex {}: ", path.destination);
        match path.total_cost {
            Some(cost) if path.found => {
                for v in &path.vertices {
                    let _ = write!(out, "{} ", v);
                }
                let _ = writeln!(out, "Total cost is {}", cost);
            }
            _ => {
                let _ = writeln!(out, "No path exists");
            }
        }
    }
    out
}

/// Records header line: `H pathfind=1 records=1 mode=<mode> <fields>`
pub fn format_records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut out = format!(
        "H pathfind={} records={} mode={}",
        RECORDS_VERSION, RECORDS_VERSION, mode
    );
    for (key, value) in fields {
        let _ = write!(out, " {}={}", key, value);
    }
    out
}

/// `V <id> dist=<d|inf> pred=<p|-1>`
pub fn format_vertex_record(
    vertex: usize,
    distance: Option<Distance>,
    pred: Option<usize>,
) -> String {
    let dist = distance.map_or_else(|| "inf".to_string(), |d| d.to_string());
    let pred = pred.map_or_else(|| "-1".to_string(), |p| p.to_string());
    format!("V {} dist={} pred={}", vertex, dist, pred)
}

/// `W <index> <word>`
pub fn format_word_record(index: usize, word: &str) -> String {
    format!("W {} {}", index, word)
}

/// Header plus one `V` line per vertex
pub fn shortest_paths_records(paths: &ShortestPaths) -> Vec<String> {
    let mut lines = vec![format_records_header(
        "graph",
        &[
            ("source", paths.source.to_string()),
            ("vertices", paths.num_vertices().to_string()),
        ],
    )];

    for v in 0..paths.num_vertices() {
        lines.push(format_vertex_record(
            v,
            paths.distance(v),
            paths.predecessors[v],
        ));
    }
    lines
}

/// Header plus one `V` line per vertex on the path, distances taken from `paths`
pub fn path_records(path: &PathResult, paths: &ShortestPaths) -> Vec<String> {
    let cost = path
        .total_cost
        .map_or_else(|| "inf".to_string(), |c| c.to_string());
    let mut lines = vec![format_records_header(
        "path",
        &[
            ("source", path.source.to_string()),
            ("to", path.destination.to_string()),
            ("found", path.found.to_string()),
            ("cost", cost),
        ],
    )];

    for &v in &path.vertices {
        lines.push(format_vertex_record(
            v,
            paths.distance(v),
            paths.predecessors[v],
        ));
    }
    lines
}

/// Header plus one `W` line per ladder word
pub fn ladder_records(result: &LadderResult) -> Vec<String> {
    let mut fields = vec![
        ("start", result.start.clone()),
        ("end", result.end.clone()),
        ("found", result.found.to_string()),
        ("length", result.len().to_string()),
    ];
    if let Some(rejection) = &result.rejection {
        fields.push(("reason", rejection.reason.as_str().to_string()));
    }

    let mut lines = vec![format_records_header("ladder", &fields)];
    lines.extend(
        result
            .words
            .iter()
            .enumerate()
            .map(|(i, word)| format_word_record(i, word)),
    );
    lines
}

/// Header plus one `C` line per verify case
pub fn verify_records(outcomes: &[VerifyOutcome]) -> Vec<String> {
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let mut lines = vec![format_records_header(
        "verify",
        &[
            ("cases", outcomes.len().to_string()),
            ("passed", passed.to_string()),
        ],
    )];

    for outcome in outcomes {
        lines.push(format!(
            "C {} {} expected={} actual={} passed={}",
            outcome.case.start,
            outcome.case.end,
            outcome.case.expected_len,
            outcome.actual_len,
            outcome.passed
        ));
    }
    lines
}

/// Human summary of verify outcomes, one line per case plus a total
pub fn format_verify_report(outcomes: &[VerifyOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        let _ = writeln!(
            out,
            "{} {} -> {}: expected {}, got {}",
            status,
            outcome.case.start,
            outcome.case.end,
            outcome.case.expected_len,
            outcome.actual_len
        );
    }
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let _ = writeln!(out, "{}/{} cases passed", passed, outcomes.len());
    out
}
