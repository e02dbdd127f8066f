//! Generic single-source search over abstract graphs.
//!
//! - **BFS** unweighted reachability with discovery order ([`breadth_first_search`])
//! - **Dijkstra** shortest paths with early exit at the goal ([`dijkstra_search`],
//!   [`dijkstra_search_all`])
//! - **Path reconstruction** from backpointer tables ([`reconstruct_path`])
//!
//! Locations are opaque: any `Clone + Eq + Hash` type works. Each search
//! borrows the graph, owns its working tables for the duration of the call
//! and hands them back to the caller.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | BFS |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra, [`path_cost`] |

mod bfs;
mod dijkstra;
mod path;
mod queue;
mod traits;

pub use bfs::{Reached, breadth_first_search};
pub use dijkstra::{CameFrom, CostSoFar, SearchResult, dijkstra_search, dijkstra_search_all};
pub use path::{path_cost, reconstruct_path};
pub use queue::{PriorityQueue, Queue};
pub use traits::{Graph, WeightedGraph};
