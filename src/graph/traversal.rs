//! Graph traversal algorithms (DFS, BFS, shortest path).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Visitation order for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Stack-based, deepest branch first.
    DepthFirst,
    /// Queue-based, layer by layer.
    BreadthFirst,
}

/// Visit every node reachable from `start` in the given order.
pub fn traverse<T>(graph: &Graph<T>, start: NodeId, order: Traversal) -> Vec<NodeId> {
    match order {
        Traversal::DepthFirst => depth_first(graph, start),
        Traversal::BreadthFirst => breadth_first(graph, start),
    }
}

/// Iterative DFS from `start`.
///
/// Nodes are marked visited when popped, not when pushed, so a node may sit
/// on the stack more than once; only its first pop records it. A stale
/// `start` yields an empty list.
pub fn depth_first<T>(graph: &Graph<T>, start: NodeId) -> Vec<NodeId> {
    if graph.node(start).is_none() {
        return Vec::new();
    }

    let mut to_visit: Vec<NodeId> = vec![start];
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut order: Vec<NodeId> = vec![start];

    while let Some(current) = to_visit.pop() {
        if visited.insert(current) {
            order.push(current);
        }
        log::trace!("dfs: at {} (stack depth {})", current, to_visit.len());

        for neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) {
                to_visit.push(neighbor);
            }
        }
    }

    log::debug!("dfs from {} visited {} nodes", start, order.len());
    order
}

/// Iterative BFS from `start`, with the same lazy marking as [`depth_first`].
///
/// A node queued more than once is expanded only on its first dequeue; its
/// later copies would re-queue neighbours that are already waiting ahead of
/// them, so the visitation order is unchanged and the queue stays O(E).
pub fn breadth_first<T>(graph: &Graph<T>, start: NodeId) -> Vec<NodeId> {
    if graph.node(start).is_none() {
        return Vec::new();
    }

    let mut to_visit: VecDeque<NodeId> = VecDeque::from([start]);
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut order: Vec<NodeId> = vec![start];

    while let Some(current) = to_visit.pop_front() {
        if visited.insert(current) {
            order.push(current);
        } else if current != start {
            continue;
        }
        log::trace!("bfs: at {} (queue length {})", current, to_visit.len());

        for neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) {
                to_visit.push_back(neighbor);
            }
        }
    }

    log::debug!("bfs from {} visited {} nodes", start, order.len());
    order
}

fn check_endpoints<T>(graph: &Graph<T>, start: NodeId, end: NodeId) -> GraphResult<()> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start));
    }
    if !graph.contains_vertex(end) {
        return Err(GraphError::VertexNotFound(end));
    }
    Ok(())
}

/// Edge count of a shortest path from `start` to `end`.
///
/// Stops as soon as `end` is discovered.
pub fn shortest_distance<T>(graph: &Graph<T>, start: NodeId, end: NodeId) -> GraphResult<usize> {
    check_endpoints(graph, start, end)?;
    if start == end {
        return Ok(0);
    }

    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut frontier: VecDeque<(NodeId, usize)> = VecDeque::from([(start, 0)]);

    while let Some((current, distance)) = frontier.pop_front() {
        for neighbor in graph.neighbors(current) {
            if neighbor == end {
                log::debug!("shortest distance {} -> {} is {}", start, end, distance + 1);
                return Ok(distance + 1);
            }
            if visited.insert(neighbor) {
                frontier.push_back((neighbor, distance + 1));
            }
        }
    }

    Err(GraphError::Unreachable { start, end })
}

/// One shortest path from `start` to `end`, both endpoints included.
pub fn shortest_path<T>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Vec<NodeId>> {
    check_endpoints(graph, start, end)?;
    if start == end {
        return Ok(vec![start]);
    }

    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut frontier: VecDeque<NodeId> = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        for neighbor in graph.neighbors(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            previous.insert(neighbor, current);
            if neighbor == end {
                return Ok(walk_back(&previous, start, end));
            }
            frontier.push_back(neighbor);
        }
    }

    Err(GraphError::Unreachable { start, end })
}

/// Follow predecessor links from `end` back to `start`.
fn walk_back(previous: &HashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
