//! Error types and exit codes for pathfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, interrupted search)
//! - 2: Usage error (bad flags/args, violated preconditions)
//! - 3: Data error (malformed graph or dictionary input)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathfind CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input files (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathfind operations
#[derive(Error, Debug)]
pub enum PathfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("{context} vertex {vertex} out of range (graph has {num_vertices} vertices)")]
    VertexOutOfRange {
        context: String,
        vertex: usize,
        num_vertices: usize,
    },

    #[error("malformed graph dimensions: {reason}")]
    MalformedGraph { reason: String },

    #[error("predecessor cycle detected while walking back from vertex {destination}")]
    PredecessorCycle { destination: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph input at line {line}: {reason}")]
    InvalidGraph { line: usize, reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),

    #[error("search interrupted")]
    Interrupted,
}

impl PathfindError {
    /// Create an error for a vertex id outside `0..num_vertices`
    pub fn vertex_out_of_range(context: &str, vertex: usize, num_vertices: usize) -> Self {
        PathfindError::VertexOutOfRange {
            context: context.to_string(),
            vertex,
            num_vertices,
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathfindError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed line of graph input
    pub fn invalid_graph(line: usize, reason: impl Into<String>) -> Self {
        PathfindError::InvalidGraph {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            PathfindError::UnknownFormat(_)
            | PathfindError::UsageError(_)
            | PathfindError::VertexOutOfRange { .. }
            | PathfindError::MalformedGraph { .. }
            | PathfindError::PredecessorCycle { .. }
            | PathfindError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            PathfindError::InvalidGraph { .. } | PathfindError::InvalidConfig { .. } => {
                ExitCode::Data
            }

            // Generic failures
            PathfindError::Json(_)
            | PathfindError::FailedOperationWithTarget { .. }
            | PathfindError::Other(_)
            | PathfindError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathfindError::UnknownFormat(_) => "unknown_format",
            PathfindError::UsageError(_) => "usage_error",
            PathfindError::VertexOutOfRange { .. } => "vertex_out_of_range",
            PathfindError::MalformedGraph { .. } => "malformed_graph",
            PathfindError::PredecessorCycle { .. } => "predecessor_cycle",
            PathfindError::InvalidValue { .. } => "invalid_value",
            PathfindError::InvalidGraph { .. } => "invalid_graph",
            PathfindError::InvalidConfig { .. } => "invalid_config",
            PathfindError::Json(_) => "json_error",
            PathfindError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathfindError::Other(_) => "other",
            PathfindError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfind operations
pub type Result<T> = std::result::Result<T, PathfindError>;
