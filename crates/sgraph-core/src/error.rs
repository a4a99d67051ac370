//! Error type shared by every sgraph crate.

use thiserror::Error;

/// Everything that can go wrong while building, mutating, generating or
/// loading a grid graph.
///
/// Structural violations are reported at the point of mutation and abort
/// that operation. An unreachable node in a shortest-path query is not an
/// error; see `sgraph_paths::UNREACHABLE`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Either grid dimension is zero, or their product overflows.
    #[error("invalid grid dimensions: {columns} columns x {rows} rows")]
    InvalidDimension { columns: usize, rows: usize },

    /// A node index outside `0..node_count`.
    #[error("node index {index} is out of range for a graph of {node_count} nodes")]
    OutOfRange { index: usize, node_count: usize },

    /// The two nodes are not 4-neighbours on the grid.
    #[error("nodes {a} and {b} are not adjacent on the grid")]
    NotAdjacent { a: usize, b: usize },

    /// Edge weights must be strictly positive (and finite).
    #[error("edge weight must be positive, got {0}")]
    InvalidWeight(f64),

    /// The edge already exists with a different weight.
    #[error("edge {a}-{b} already has weight {existing}, cannot set {requested}")]
    ConflictingEdge {
        a: usize,
        b: usize,
        existing: f64,
        requested: f64,
    },

    /// Bad interval bounds.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// Requested component count is outside `1..=node_count`.
    #[error("cannot split {node_count} nodes into {requested} components")]
    InvalidComponentCount { requested: usize, node_count: usize },

    /// The generator ran out of retries before reaching the target.
    #[error("partition into {requested} components not reached (best: {reached})")]
    PartitionUnreachable { requested: usize, reached: usize },

    /// The text form of a graph could not be parsed.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = GraphError::ConflictingEdge {
            a: 0,
            b: 1,
            existing: 2.5,
            requested: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "edge 0-1 already has weight 2.5, cannot set 3"
        );

        let err = GraphError::OutOfRange {
            index: 12,
            node_count: 12,
        };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn io_errors_convert() {
        fn open() -> Result<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(GraphError::Io(_))));
    }
}
