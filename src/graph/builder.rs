//! Fluent API for building Graph instances.

use crate::types::NodeId;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Every node created through the builder is also a vertex.
pub struct GraphBuilder<T> {
    graph: Graph<T>,
}

impl<T> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Add a vertex holding `value`.
    pub fn vertex(&mut self, value: T) -> NodeId {
        let id = self.graph.create_node(value);
        self.graph.add_vertex(id);
        id
    }

    /// Add an edge between two vertices.
    pub fn edge(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.graph.add_edge(a, b);
        self
    }

    /// Add edges between each consecutive pair in `ids`.
    pub fn path(&mut self, ids: &[NodeId]) -> &mut Self {
        for pair in ids.windows(2) {
            if let [a, b] = *pair {
                self.graph.add_edge(a, b);
            }
        }
        self
    }

    /// Finish and return the graph.
    pub fn build(self) -> Graph<T> {
        self.graph
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
