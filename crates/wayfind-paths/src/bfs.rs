use std::collections::HashSet;

use crate::queue::Queue;
use crate::traits::Graph;

/// Locations reached by [`breadth_first_search`], with their discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reached<L: Eq + std::hash::Hash> {
    set: HashSet<L>,
    order: Vec<L>,
}

impl<L: Clone + Eq + std::hash::Hash> Reached<L> {
    /// Whether `id` was reached from the start.
    #[inline]
    pub fn contains(&self, id: &L) -> bool {
        self.set.contains(id)
    }

    /// Number of reached locations, start included.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Locations in the order they were discovered. With a FIFO frontier this
    /// is also the order in which they were expanded.
    #[inline]
    pub fn order(&self) -> &[L] {
        &self.order
    }

    /// Iterate over reached locations in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.order.iter()
    }

    /// Drop the discovery order and keep only the membership set.
    pub fn into_set(self) -> HashSet<L> {
        self.set
    }
}

impl<'a, L: Clone + Eq + std::hash::Hash> IntoIterator for &'a Reached<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Explore everything reachable from `start`, one edge at a time.
///
/// There is no goal: the whole component is always visited. Every location
/// is enqueued at most once, so [`Reached::order`] never repeats an entry.
pub fn breadth_first_search<G: Graph>(graph: &G, start: G::Location) -> Reached<G::Location> {
    let mut frontier = Queue::new();
    let mut set = HashSet::new();
    let mut order = Vec::new();

    set.insert(start.clone());
    order.push(start.clone());
    frontier.put(start);

    let mut nbuf = Vec::new();
    let mut visited = 0usize;

    while let Some(current) = frontier.get() {
        // FIFO: the n-th location dequeued is order[n].
        log::trace!("bfs: visiting location #{visited}");
        visited += 1;

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            if set.contains(&next) {
                continue;
            }
            set.insert(next.clone());
            order.push(next.clone());
            frontier.put(next);
        }
    }

    log::debug!("bfs: reached {} locations", set.len());
    Reached { set, order }
}
