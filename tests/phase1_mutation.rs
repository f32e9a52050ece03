//! Phase 1 tests: Node arena + vertex/edge mutation.

use graphwalk::graph::{Graph, GraphBuilder};
use graphwalk::types::NodeId;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== Helper ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create `values.len()` nodes and add them all as vertices.
fn with_vertices<'a>(values: &[&'a str]) -> (Graph<&'a str>, Vec<NodeId>) {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = values.iter().map(|v| graph.create_node(*v)).collect();
    graph.add_vertices(ids.iter().copied());
    (graph, ids)
}

fn assert_symmetric<T>(graph: &Graph<T>, ids: &[NodeId]) {
    for &a in ids {
        for b in graph.neighbors(a) {
            assert!(
                graph.has_edge(b, a),
                "{} lists {} but not the other way round",
                a,
                b
            );
        }
    }
}

// ==================== Vertex Tests ====================

#[test]
fn test_new_graph_is_empty() {
    let graph: Graph<u32> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_created_node_is_not_a_vertex() {
    let mut graph = Graph::new();
    let id = graph.create_node("lonely");
    assert!(!graph.contains_vertex(id));
    assert_eq!(graph.value(id), Some(&"lonely"));

    graph.add_vertex(id);
    assert!(graph.contains_vertex(id));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_add_vertex_idempotent() {
    let mut graph = Graph::new();
    let id = graph.create_node(1);
    graph.add_vertex(id);
    graph.add_vertex(id);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_equal_values_are_distinct_nodes() {
    let mut graph = Graph::new();
    let a = graph.create_node("same");
    let b = graph.create_node("same");
    assert_ne!(a, b);
    graph.add_vertices([a, b]);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_add_vertices_order_does_not_matter() {
    let mut left = Graph::new();
    let mut right = Graph::new();
    let l: Vec<NodeId> = (0..5).map(|i| left.create_node(i)).collect();
    let r: Vec<NodeId> = (0..5).map(|i| right.create_node(i)).collect();

    left.add_vertices(l.iter().copied());
    right.add_vertices(r.iter().rev().copied());

    assert_eq!(left.vertex_count(), right.vertex_count());
    for (a, b) in l.iter().zip(&r) {
        assert!(left.contains_vertex(*a));
        assert!(right.contains_vertex(*b));
    }
}

#[test]
fn test_vertices_in_insertion_order() {
    let (graph, ids) = with_vertices(&["A", "B", "C"]);
    let listed: Vec<NodeId> = graph.vertices().collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_value_mut() {
    let mut graph = Graph::new();
    let id = graph.create_node(String::from("old"));
    if let Some(node) = graph.node_mut(id) {
        node.value_mut().push_str("-new");
    }
    assert_eq!(graph.value(id).map(String::as_str), Some("old-new"));
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_symmetric() {
    let (mut graph, ids) = with_vertices(&["A", "B"]);
    graph.add_edge(ids[0], ids[1]);

    let a = graph.node(ids[0]).unwrap();
    let b = graph.node(ids[1]).unwrap();
    assert!(a.is_adjacent(ids[1]));
    assert!(b.is_adjacent(ids[0]));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_idempotent() {
    let (mut graph, ids) = with_vertices(&["A", "B"]);
    graph.add_edge(ids[0], ids[1]);
    graph.add_edge(ids[1], ids[0]);
    graph.add_edge(ids[0], ids[1]);
    assert_eq!(graph.node(ids[0]).unwrap().degree(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_between_non_members() {
    let mut graph = Graph::new();
    let a = graph.create_node('a');
    let b = graph.create_node('b');
    graph.add_edge(a, b);

    assert!(graph.has_edge(a, b));
    assert!(graph.has_edge(b, a));
    assert!(!graph.contains_vertex(a));
    assert!(!graph.contains_vertex(b));
}

#[test]
fn test_self_loop() {
    let (mut graph, ids) = with_vertices(&["A", "B"]);
    graph.add_edge(ids[0], ids[0]);
    graph.add_edge(ids[0], ids[1]);

    assert!(graph.has_edge(ids[0], ids[0]));
    assert_eq!(graph.node(ids[0]).unwrap().degree(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_neighbors_in_insertion_order() {
    let (mut graph, ids) = with_vertices(&["X", "P", "Q", "R"]);
    graph.add_edge(ids[0], ids[2]);
    graph.add_edge(ids[0], ids[1]);
    graph.add_edge(ids[0], ids[3]);

    let neighbors: Vec<NodeId> = graph.neighbors(ids[0]).collect();
    assert_eq!(neighbors, vec![ids[2], ids[1], ids[3]]);
}

#[test]
fn test_remove_edge() {
    let (mut graph, ids) = with_vertices(&["A", "B", "C"]);
    graph.add_edge(ids[0], ids[1]);
    graph.add_edge(ids[0], ids[2]);

    graph.remove_edge(ids[1], ids[0]);
    assert!(!graph.has_edge(ids[0], ids[1]));
    assert!(!graph.has_edge(ids[1], ids[0]));
    assert!(graph.has_edge(ids[0], ids[2]));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_edge_keeps_neighbor_order() {
    let (mut graph, ids) = with_vertices(&["X", "A", "B", "C", "D"]);
    for &leaf in &ids[1..] {
        graph.add_edge(ids[0], leaf);
    }
    graph.remove_edge(ids[0], ids[2]);

    let neighbors: Vec<NodeId> = graph.neighbors(ids[0]).collect();
    assert_eq!(neighbors, vec![ids[1], ids[3], ids[4]]);
}

#[test]
fn test_remove_missing_edge_is_noop() {
    let (mut graph, ids) = with_vertices(&["A", "B", "C"]);
    graph.add_edge(ids[0], ids[1]);
    graph.remove_edge(ids[0], ids[2]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.vertex_count(), 3);
}

// ==================== Vertex Removal Tests ====================

#[test]
fn test_remove_vertex_leaves_no_dangling_references() {
    init_logging();
    let (mut graph, ids) = with_vertices(&["A", "B", "C", "D"]);
    graph.add_edge(ids[0], ids[1]);
    graph.add_edge(ids[1], ids[2]);
    graph.add_edge(ids[1], ids[3]);
    graph.add_edge(ids[2], ids[3]);

    let removed = graph.remove_vertex(ids[1]);
    assert_eq!(removed, Some("B"));
    assert!(!graph.contains_vertex(ids[1]));
    assert_eq!(graph.vertex_count(), 3);
    for id in graph.vertices() {
        assert!(!graph.node(id).unwrap().is_adjacent(ids[1]));
    }
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(ids[2], ids[3]));
}

#[test]
fn test_remove_vertex_clears_non_member_neighbors() {
    let mut graph = Graph::new();
    let member = graph.create_node(1);
    let outsider = graph.create_node(2);
    graph.add_vertex(member);
    graph.add_edge(member, outsider);

    graph.remove_vertex(member);
    assert_eq!(graph.node(outsider).unwrap().degree(), 0);
}

#[test]
fn test_remove_vertex_twice() {
    let (mut graph, ids) = with_vertices(&["A"]);
    assert_eq!(graph.remove_vertex(ids[0]), Some("A"));
    assert_eq!(graph.remove_vertex(ids[0]), None);
    assert!(graph.is_empty());
}

#[test]
fn test_stale_id_is_ignored() {
    init_logging();
    let (mut graph, ids) = with_vertices(&["A", "B"]);
    graph.remove_vertex(ids[1]);

    graph.add_vertex(ids[1]);
    graph.add_edge(ids[0], ids[1]);
    graph.remove_edge(ids[0], ids[1]);

    assert!(!graph.contains_vertex(ids[1]));
    assert!(graph.node(ids[1]).is_none());
    assert_eq!(graph.node(ids[0]).unwrap().degree(), 0);
    assert_eq!(graph.neighbors(ids[1]).count(), 0);
}

#[test]
fn test_ids_not_reused_after_removal() {
    let mut graph = Graph::new();
    let a = graph.create_node(0);
    graph.remove_vertex(a);
    let b = graph.create_node(1);
    assert_ne!(a, b);
    assert!(graph.node(a).is_none());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_path() {
    let mut builder = GraphBuilder::new();
    let ids: Vec<NodeId> = ["A", "B", "C", "D"]
        .iter()
        .map(|v| builder.vertex(*v))
        .collect();
    builder.path(&ids);
    let graph = builder.build();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(ids[0], ids[1]));
    assert!(graph.has_edge(ids[2], ids[3]));
    assert!(!graph.has_edge(ids[0], ids[3]));
}

#[test]
fn test_builder_chained_edges() {
    let mut builder = GraphBuilder::new();
    let x = builder.vertex("X");
    let p = builder.vertex("P");
    let q = builder.vertex("Q");
    builder.edge(x, p).edge(x, q);
    let graph = builder.build();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains_vertex(x));
}

// ==================== Randomised Invariants ====================

#[test]
fn test_random_mutations_keep_adjacency_symmetric() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..40).map(|i| graph.create_node(i)).collect();
    graph.add_vertices(ids.iter().copied());

    for _ in 0..200 {
        let a = ids[rng.gen_range(0..ids.len())];
        let b = ids[rng.gen_range(0..ids.len())];
        if rng.gen_bool(0.75) {
            graph.add_edge(a, b);
        } else {
            graph.remove_edge(a, b);
        }
    }
    assert_symmetric(&graph, &ids);

    let mut removed = Vec::new();
    for _ in 0..10 {
        let victim = ids[rng.gen_range(0..ids.len())];
        graph.remove_vertex(victim);
        removed.push(victim);
    }

    let live: Vec<NodeId> = graph.vertices().collect();
    assert_symmetric(&graph, &live);
    for id in &live {
        for gone in &removed {
            assert!(!graph.has_edge(*id, *gone));
        }
    }
    for gone in &removed {
        assert!(!graph.contains_vertex(*gone));
    }
}
