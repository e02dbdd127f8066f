//! Breadth-first search over the six-node example graph.
//!
//! Run: cargo run --bin bfs-graph

use wayfind_demos::{bfs_report, example_graph};

fn main() {
    env_logger::init();

    let graph = example_graph();
    if let Err(e) = graph.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    print!("{}", bfs_report(&graph, &["A", "E"]));
}
