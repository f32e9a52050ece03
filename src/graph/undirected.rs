//! Core graph structure: a node arena plus the vertex set.

use indexmap::{IndexMap, IndexSet};

use crate::types::{GraphResult, Node, NodeId};

use super::traversal;

/// An undirected graph over opaque values.
///
/// Nodes live in an arena keyed by [`NodeId`]; adjacency is stored as id sets
/// on each node, so the cyclic neighbour relation never needs shared
/// ownership. A node can exist in the arena without being a vertex: it joins
/// the vertex set only through [`Graph::add_vertex`].
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Every live node, created or added.
    arena: IndexMap<NodeId, Node<T>>,
    /// The vertex set, in insertion order.
    nodes: IndexSet<NodeId>,
    /// Next id to hand out.
    next_id: u64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            arena: IndexMap::new(),
            nodes: IndexSet::new(),
            next_id: 0,
        }
    }

    /// Allocate a node holding `value`. It is not a vertex until added.
    pub fn create_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.arena.insert(id, Node::new(value));
        id
    }

    /// Insert a node into the vertex set. Adding it twice is a no-op.
    pub fn add_vertex(&mut self, vertex: NodeId) {
        if !self.arena.contains_key(&vertex) {
            log::debug!("add_vertex: ignoring stale node {}", vertex);
            return;
        }
        self.nodes.insert(vertex);
    }

    /// Insert each node into the vertex set.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Connect `v1` and `v2` with an undirected edge.
    ///
    /// Neither endpoint has to be in the vertex set. Adding an existing edge
    /// changes nothing.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) {
        if !self.arena.contains_key(&v1) || !self.arena.contains_key(&v2) {
            log::debug!("add_edge: ignoring edge {} - {} with stale endpoint", v1, v2);
            return;
        }
        if let Some(node) = self.arena.get_mut(&v1) {
            node.adjacent.insert(v2);
        }
        if let Some(node) = self.arena.get_mut(&v2) {
            node.adjacent.insert(v1);
        }
    }

    /// Disconnect `v1` and `v2`. No-op if they are not adjacent.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) {
        if let Some(node) = self.arena.get_mut(&v1) {
            node.adjacent.shift_remove(&v2);
        }
        if let Some(node) = self.arena.get_mut(&v2) {
            node.adjacent.shift_remove(&v1);
        }
    }

    /// Remove a vertex and every edge touching it, returning its value.
    ///
    /// Scans every node (there is no reverse index), so the cost is linear
    /// in the node count. Returns `None` for a stale id.
    pub fn remove_vertex(&mut self, vertex: NodeId) -> Option<T> {
        for node in self.arena.values_mut() {
            node.adjacent.shift_remove(&vertex);
        }
        self.nodes.shift_remove(&vertex);
        self.arena.shift_remove(&vertex).map(|node| node.value)
    }

    /// Whether `vertex` is in the vertex set.
    pub fn contains_vertex(&self, vertex: NodeId) -> bool {
        self.nodes.contains(&vertex)
    }

    /// Get a node by id (immutable).
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(&id)
    }

    /// Get a node by id (mutable). Adjacency stays read-only.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.arena.get_mut(&id)
    }

    /// Shortcut for the value held by `id`.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(&id).map(Node::value)
    }

    /// Neighbours of `id` in edge insertion order. Empty for a stale id.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.arena.get(&id).into_iter().flat_map(Node::adjacent)
    }

    /// Whether an edge connects `v1` and `v2`.
    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.arena
            .get(&v1)
            .is_some_and(|node| node.is_adjacent(v2))
    }

    /// Members of the vertex set, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges among live nodes. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut endpoints = 0;
        let mut loops = 0;
        for (&id, node) in &self.arena {
            endpoints += node.degree();
            if node.is_adjacent(id) {
                loops += 1;
            }
        }
        (endpoints - loops) / 2 + loops
    }

    /// Whether the vertex set is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values reachable from `start`, in depth-first order.
    pub fn depth_first_search(&self, start: NodeId) -> Vec<&T> {
        self.values_of(traversal::depth_first(self, start))
    }

    /// Values reachable from `start`, in breadth-first order.
    pub fn breadth_first_search(&self, start: NodeId) -> Vec<&T> {
        self.values_of(traversal::breadth_first(self, start))
    }

    /// Number of edges on a shortest path between two vertices.
    ///
    /// Fails with [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
    /// when an endpoint is not a vertex and with
    /// [`GraphError::Unreachable`](crate::GraphError::Unreachable) when no
    /// path exists.
    pub fn distance_of_shortest_path(&self, start: NodeId, end: NodeId) -> GraphResult<usize> {
        traversal::shortest_distance(self, start, end)
    }

    /// One shortest path between two vertices, endpoints included.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> GraphResult<Vec<NodeId>> {
        traversal::shortest_path(self, start, end)
    }

    fn values_of(&self, ids: Vec<NodeId>) -> Vec<&T> {
        ids.into_iter().filter_map(|id| self.value(id)).collect()
    }
}
