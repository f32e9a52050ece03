//! CLI entry point for the `gwalk` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::cli::LabeledGraph;
use graphwalk::graph::Traversal;
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — traverse an undirected graph given as edge arguments"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Edges as A-B pairs, e.g. `-e A-B -e B-C`
    #[arg(short, long = "edge", global = true)]
    edges: Vec<String>,

    /// Isolated vertices to add alongside the edges
    #[arg(long = "vertex", global = true)]
    vertices: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Depth-first visitation order from a vertex
    Dfs {
        /// Starting vertex
        start: String,
    },
    /// Breadth-first visitation order from a vertex
    Bfs {
        /// Starting vertex
        start: String,
    },
    /// Number of edges on a shortest path
    Distance {
        /// Starting vertex
        start: String,
        /// Target vertex
        end: String,
    },
    /// One shortest path between two vertices
    Path {
        /// Starting vertex
        start: String,
        /// Target vertex
        end: String,
    },
    /// Vertex, edge and degree counts
    Stats,
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "text" => false,
        "json" => true,
        other => {
            eprintln!("Invalid format: {}", other);
            process::exit(3);
        }
    };

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = LabeledGraph::from_args(&cli.edges, &cli.vertices).and_then(|graph| {
        match &cli.command {
            Commands::Dfs { start } => {
                commands::cmd_traverse(&graph, start, Traversal::DepthFirst, json)
            }
            Commands::Bfs { start } => {
                commands::cmd_traverse(&graph, start, Traversal::BreadthFirst, json)
            }
            Commands::Distance { start, end } => commands::cmd_distance(&graph, start, end, json),
            Commands::Path { start, end } => commands::cmd_path(&graph, start, end, json),
            Commands::Stats => commands::cmd_stats(&graph, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) | GraphError::UnknownLabel(_) => 3,
            GraphError::VertexNotFound(_) | GraphError::Unreachable { .. } => 4,
        };
        process::exit(code);
    }
}
