//! Error types for the graphwalk library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Endpoint is not a member of the vertex set.
    #[error("Vertex {0} not found in graph")]
    VertexNotFound(NodeId),

    /// No path connects the two vertices.
    #[error("Vertex {end} is unreachable from {start}")]
    Unreachable { start: NodeId, end: NodeId },

    /// Edge argument is not of the form `A-B`.
    #[error("Invalid edge spec: {0:?} (expected A-B)")]
    InvalidEdgeSpec(String),

    /// A vertex name that no edge or vertex argument introduced.
    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
