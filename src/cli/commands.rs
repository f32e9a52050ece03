//! CLI command implementations.

use indexmap::IndexMap;

use crate::graph::{traverse, Graph, Traversal};
use crate::types::{GraphError, GraphResult, NodeId, EDGE_SEPARATOR};

/// A `Graph<String>` whose vertices are addressed by their label.
pub struct LabeledGraph {
    graph: Graph<String>,
    labels: IndexMap<String, NodeId>,
}

impl LabeledGraph {
    /// Build a graph from `A-B` edge specs plus standalone vertex names.
    ///
    /// Every label becomes a vertex the first time it is seen.
    pub fn from_args(edges: &[String], vertices: &[String]) -> GraphResult<Self> {
        let mut labeled = Self {
            graph: Graph::new(),
            labels: IndexMap::new(),
        };
        for name in vertices {
            labeled.intern(name.trim());
        }
        for spec in edges {
            let (a, b) = parse_edge(spec)?;
            let a = labeled.intern(a);
            let b = labeled.intern(b);
            labeled.graph.add_edge(a, b);
        }
        log::debug!(
            "built graph with {} vertices and {} edges",
            labeled.graph.vertex_count(),
            labeled.graph.edge_count()
        );
        Ok(labeled)
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }
        let id = self.graph.create_node(label.to_string());
        self.graph.add_vertex(id);
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Resolve a label to its vertex.
    pub fn id(&self, label: &str) -> GraphResult<NodeId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    /// The label stored on `id`.
    pub fn label(&self, id: NodeId) -> &str {
        self.graph.value(id).map(String::as_str).unwrap_or_default()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    fn labels_of(&self, ids: &[NodeId]) -> Vec<&str> {
        ids.iter().map(|&id| self.label(id)).collect()
    }
}

/// Split an `A-B` edge spec into its two trimmed labels.
pub fn parse_edge(spec: &str) -> GraphResult<(&str, &str)> {
    let (a, b) = spec
        .split_once(EDGE_SEPARATOR)
        .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(GraphError::InvalidEdgeSpec(spec.to_string()));
    }
    Ok((a, b))
}

fn order_name(order: Traversal) -> &'static str {
    match order {
        Traversal::DepthFirst => "dfs",
        Traversal::BreadthFirst => "bfs",
    }
}

/// Render a DFS or BFS visitation order.
pub fn render_traversal(
    graph: &LabeledGraph,
    start: &str,
    order: Traversal,
    json: bool,
) -> GraphResult<String> {
    let start_id = graph.id(start)?;
    let visited = traverse(graph.graph(), start_id, order);
    let labels = graph.labels_of(&visited);

    if json {
        let out = serde_json::json!({
            "order": order_name(order),
            "start": start,
            "visited": labels,
            "ids": visited,
        });
        Ok(out.to_string())
    } else {
        Ok(labels.join(" "))
    }
}

/// Render the shortest-path distance. An unreachable target is an answer,
/// not an error.
pub fn render_distance(
    graph: &LabeledGraph,
    start: &str,
    end: &str,
    json: bool,
) -> GraphResult<String> {
    let start_id = graph.id(start)?;
    let end_id = graph.id(end)?;
    let distance = match graph.graph().distance_of_shortest_path(start_id, end_id) {
        Ok(d) => Some(d),
        Err(GraphError::Unreachable { .. }) => None,
        Err(e) => return Err(e),
    };

    if json {
        let out = serde_json::json!({
            "start": start,
            "end": end,
            "reachable": distance.is_some(),
            "distance": distance,
        });
        return Ok(out.to_string());
    }
    Ok(match distance {
        Some(d) => d.to_string(),
        None => format!("{} is unreachable from {}", end, start),
    })
}

/// Render one shortest path.
pub fn render_path(
    graph: &LabeledGraph,
    start: &str,
    end: &str,
    json: bool,
) -> GraphResult<String> {
    let start_id = graph.id(start)?;
    let end_id = graph.id(end)?;
    let path = match graph.graph().shortest_path(start_id, end_id) {
        Ok(path) => Some(path),
        Err(GraphError::Unreachable { .. }) => None,
        Err(e) => return Err(e),
    };
    let labels = path.as_deref().map(|p| graph.labels_of(p));

    if json {
        let out = serde_json::json!({
            "start": start,
            "end": end,
            "path": labels,
            "ids": path,
        });
        return Ok(out.to_string());
    }
    Ok(match labels {
        Some(labels) => labels.join(format!(" {} ", EDGE_SEPARATOR).as_str()),
        None => format!("{} is unreachable from {}", end, start),
    })
}

/// Render vertex, edge and degree counts.
pub fn render_stats(graph: &LabeledGraph, json: bool) -> String {
    let g = graph.graph();
    let degrees: Vec<usize> = g
        .vertices()
        .filter_map(|id| g.node(id).map(|n| n.degree()))
        .collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let isolated = degrees.iter().filter(|&&d| d == 0).count();

    if json {
        serde_json::json!({
            "vertices": g.vertex_count(),
            "edges": g.edge_count(),
            "min_degree": min_degree,
            "max_degree": max_degree,
            "isolated": isolated,
        })
        .to_string()
    } else {
        format!(
            "Vertices: {}\nEdges: {}\nMin degree: {}\nMax degree: {}\nIsolated: {}",
            g.vertex_count(),
            g.edge_count(),
            min_degree,
            max_degree,
            isolated
        )
    }
}

/// Print a DFS or BFS visitation order.
pub fn cmd_traverse(
    graph: &LabeledGraph,
    start: &str,
    order: Traversal,
    json: bool,
) -> GraphResult<()> {
    println!("{}", render_traversal(graph, start, order, json)?);
    Ok(())
}

/// Print the shortest-path distance.
pub fn cmd_distance(graph: &LabeledGraph, start: &str, end: &str, json: bool) -> GraphResult<()> {
    println!("{}", render_distance(graph, start, end, json)?);
    Ok(())
}

/// Print one shortest path.
pub fn cmd_path(graph: &LabeledGraph, start: &str, end: &str, json: bool) -> GraphResult<()> {
    println!("{}", render_path(graph, start, end, json)?);
    Ok(())
}

/// Print graph statistics.
pub fn cmd_stats(graph: &LabeledGraph, json: bool) -> GraphResult<()> {
    println!("{}", render_stats(graph, json));
    Ok(())
}
