//! Error macros for pathfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathfindError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::PathfindError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a vertex id outside the graph
#[macro_export]
macro_rules! ensure_vertex {
    ($context:expr, $vertex:expr, $num_vertices:expr) => {
        if $vertex >= $num_vertices {
            return Err($crate::error::PathfindError::vertex_out_of_range(
                $context,
                $vertex,
                $num_vertices,
            ));
        }
    };
}
