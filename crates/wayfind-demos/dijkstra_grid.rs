//! Dijkstra search on a weighted grid, drawn as ASCII.
//!
//! Run: cargo run --bin dijkstra-grid [grid.json]
//!
//! Without an argument the classic 10x10 diagram is used.

use std::path::PathBuf;

use wayfind_demos::{DemoError, dijkstra_report, load_config};

fn run() -> Result<(), DemoError> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = load_config(path.as_deref())?;
    print!("{}", dijkstra_report(&cfg)?);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
