//! Node handles and the node struct.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

/// Stable handle to a node in a graph's arena.
///
/// Ids are allocated sequentially and never reused, so a handle to a removed
/// node can never alias a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// The raw arena index.
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: an opaque value plus the ids of its neighbours.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    /// Neighbour ids, in the order the edges were added.
    pub(crate) adjacent: IndexSet<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The payload (mutable).
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Neighbour ids in edge insertion order.
    pub fn adjacent(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacent.iter().copied()
    }

    /// Whether `id` is a neighbour.
    pub fn is_adjacent(&self, id: NodeId) -> bool {
        self.adjacent.contains(&id)
    }

    /// Number of neighbours.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
