//! All data types for the graphwalk library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Separator between the two endpoints of an edge argument (`A-B`).
pub const EDGE_SEPARATOR: char = '-';
