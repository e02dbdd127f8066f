use std::collections::HashMap;
use std::hash::Hash;

use crate::path::reconstruct_path;
use crate::queue::PriorityQueue;
use crate::traits::WeightedGraph;

/// Backpointers: each location maps to its predecessor on the best known
/// path. The start maps to `None`.
pub type CameFrom<L> = HashMap<L, Option<L>>;

/// Best known accumulated cost from the start to each location.
pub type CostSoFar<L> = HashMap<L, f64>;

/// Tables produced by [`dijkstra_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<L: Eq + Hash> {
    pub came_from: CameFrom<L>,
    pub cost_so_far: CostSoFar<L>,
}

impl<L: Clone + Eq + Hash> SearchResult<L> {
    /// Whether a path to `id` was found.
    #[inline]
    pub fn reached(&self, id: &L) -> bool {
        self.came_from.contains_key(id)
    }

    /// Accumulated cost recorded for `id`, if it was ever discovered.
    #[inline]
    pub fn cost_to(&self, id: &L) -> Option<f64> {
        self.cost_so_far.get(id).copied()
    }

    /// Route from `start` to `goal` following the backpointers.
    ///
    /// Empty when `goal` was never reached. See [`reconstruct_path`].
    pub fn path(&self, start: &L, goal: &L) -> Vec<L> {
        reconstruct_path(&self.came_from, start, goal)
    }
}

/// Shortest paths from `start`, stopping as soon as `goal` is dequeued.
///
/// Costs are exact for every location dequeued before the goal. Others may
/// hold a provisional cost. If `goal` is unreachable the frontier drains and
/// `came_from` simply lacks a `goal` entry.
///
/// Edge costs must be non-negative; negative costs give unspecified results.
pub fn dijkstra_search<G: WeightedGraph>(
    graph: &G,
    start: G::Location,
    goal: &G::Location,
) -> SearchResult<G::Location>
where
    G::Location: Ord,
{
    search(graph, start, Some(goal))
}

/// Shortest paths from `start` to everything it can reach.
pub fn dijkstra_search_all<G: WeightedGraph>(
    graph: &G,
    start: G::Location,
) -> SearchResult<G::Location>
where
    G::Location: Ord,
{
    search(graph, start, None)
}

fn search<G: WeightedGraph>(
    graph: &G,
    start: G::Location,
    goal: Option<&G::Location>,
) -> SearchResult<G::Location>
where
    G::Location: Ord,
{
    let mut frontier = PriorityQueue::new();
    let mut came_from: CameFrom<G::Location> = HashMap::new();
    let mut cost_so_far: CostSoFar<G::Location> = HashMap::new();

    came_from.insert(start.clone(), None);
    cost_so_far.insert(start.clone(), 0.0);
    frontier.put(start, 0.0);

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    while let Some(current) = frontier.get() {
        if goal == Some(&current) {
            log::debug!("dijkstra: goal dequeued after {expanded} expansions");
            break;
        }

        // Every queued location had its cost recorded before it was queued.
        let current_cost = cost_so_far[&current];
        expanded += 1;

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            let step = graph.cost(&current, &next);
            debug_assert!(step >= 0.0, "negative edge cost {step}");
            let new_cost = current_cost + step;

            let improved = match cost_so_far.get(&next) {
                Some(&old) => new_cost < old,
                None => true,
            };
            if !improved {
                continue;
            }

            log::trace!("dijkstra: relaxed a neighbor to cost {new_cost}");
            cost_so_far.insert(next.clone(), new_cost);
            came_from.insert(next.clone(), Some(current.clone()));
            frontier.put(next, new_cost);
        }
    }

    log::debug!(
        "dijkstra: {} locations discovered, {} expanded",
        cost_so_far.len(),
        expanded
    );
    SearchResult {
        came_from,
        cost_so_far,
    }
}
