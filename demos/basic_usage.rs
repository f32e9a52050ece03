//! Basic build -> traverse -> query flow.

use graphwalk::*;

fn main() -> GraphResult<()> {
    // Create a graph
    let mut builder = GraphBuilder::new();

    //   Q - P - S
    //   |   |   |
    //   R   X - U
    //    \  |
    //      T
    let q = builder.vertex("Q");
    let p = builder.vertex("P");
    let s = builder.vertex("S");
    let r = builder.vertex("R");
    let x = builder.vertex("X");
    let u = builder.vertex("U");
    let t = builder.vertex("T");

    builder
        .path(&[r, q, p, s, u, x])
        .edge(p, x)
        .edge(x, t)
        .edge(r, t);

    let mut graph = builder.build();

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("DFS from Q: {:?}", graph.depth_first_search(q));
    println!("BFS from Q: {:?}", graph.breadth_first_search(q));
    println!("Distance Q -> U: {}", graph.distance_of_shortest_path(q, u)?);

    let path: Vec<&str> = graph
        .shortest_path(r, s)?
        .into_iter()
        .filter_map(|id| graph.value(id).copied())
        .collect();
    println!("Shortest path R -> S: {}", path.join(" - "));

    // Cut X out and check what is still connected
    graph.remove_vertex(x);
    match graph.distance_of_shortest_path(t, u) {
        Ok(d) => println!("After removing X, T -> U takes {} hops", d),
        Err(e) => println!("After removing X: {}", e),
    }

    Ok(())
}
