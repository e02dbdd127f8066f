//! Turning backpointer tables into explicit routes.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::WeightedGraph;

/// Walk backpointers from `goal` to `start` and return the route in
/// start-to-goal order, both ends included.
///
/// Returns an empty vector when `goal` has no entry in `came_from`, which is
/// how an unreachable goal is reported. When `start == goal` the result is
/// `[start]`. A non-empty result always begins at `start` and ends at `goal`.
///
/// # Precondition
///
/// `came_from` must form a tree rooted at `start`, as the tables produced by
/// [`dijkstra_search`](crate::dijkstra_search) always do. The walk does not
/// detect cycles: a cyclic table makes it loop forever. If a `None`
/// backpointer (or a missing entry) is met before reaching `start`, the
/// table was not grown from `start` and the result is empty.
pub fn reconstruct_path<L: Clone + Eq + Hash>(
    came_from: &HashMap<L, Option<L>>,
    start: &L,
    goal: &L,
) -> Vec<L> {
    if !came_from.contains_key(goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = goal.clone();
    while current != *start {
        let prev = came_from.get(&current).cloned().flatten();
        path.push(current);
        match prev {
            Some(p) => current = p,
            None => {
                log::warn!("reconstruct_path: backpointers end before reaching start");
                return Vec::new();
            }
        }
    }
    path.push(start.clone());
    path.reverse();
    path
}

/// Sum of [`WeightedGraph::cost`] over consecutive steps of `path`.
///
/// Zero for paths with fewer than two locations.
pub fn path_cost<G: WeightedGraph>(graph: &G, path: &[G::Location]) -> f64 {
    path.windows(2).map(|w| graph.cost(&w[0], &w[1])).sum()
}
