//! graphwalk — an in-memory undirected graph with traversal queries.
//!
//! Nodes hold opaque values and live in an arena addressed by [`NodeId`];
//! the graph exposes vertex/edge mutation plus depth-first search,
//! breadth-first search and unweighted shortest-path distance.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{traverse, Graph, GraphBuilder, Traversal};
pub use types::{GraphError, GraphResult, Node, NodeId, EDGE_SEPARATOR};
