//! Explicit adjacency-list graphs.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use wayfind_paths::Graph;

/// A graph given as an explicit list of neighbors per location.
///
/// Neighbors are reported in the order the edges were added. Locations are
/// remembered in insertion order so that [`locations`](Self::locations) is
/// deterministic.
#[derive(Debug, Clone)]
pub struct SimpleGraph<L> {
    order: Vec<L>,
    edges: HashMap<L, Vec<L>>,
}

impl<L: Clone + Eq + Hash> Default for SimpleGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone + Eq + Hash> SimpleGraph<L> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Build a graph from `(location, neighbors)` pairs.
    ///
    /// A location listed twice has its neighbor lists concatenated.
    pub fn with_edges<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = L>,
    {
        let mut g = Self::new();
        for (from, tos) in entries {
            g.add_location(from.clone());
            for to in tos {
                g.add_edge(from.clone(), to);
            }
        }
        g
    }

    /// Declare a location. Does nothing if it already exists.
    pub fn add_location(&mut self, id: L) {
        if !self.edges.contains_key(&id) {
            self.order.push(id.clone());
            self.edges.insert(id, Vec::new());
        }
    }

    /// Add a directed edge. `from` is declared if needed; `to` is not.
    pub fn add_edge(&mut self, from: L, to: L) {
        self.add_location(from.clone());
        if let Some(list) = self.edges.get_mut(&from) {
            list.push(to);
        }
    }

    /// Whether `id` has been declared.
    #[inline]
    pub fn contains(&self, id: &L) -> bool {
        self.edges.contains_key(id)
    }

    /// Declared locations in insertion order.
    pub fn locations(&self) -> &[L] {
        &self.order
    }

    /// Number of declared locations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check that every edge points at a declared location.
    ///
    /// Searches never call this; it exists for callers that want to fail
    /// fast on a malformed graph before searching it.
    pub fn validate(&self) -> Result<(), GraphError<L>> {
        for from in &self.order {
            for to in &self.edges[from] {
                if !self.edges.contains_key(to) {
                    return Err(GraphError::UnknownLocation {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<L: Clone + Eq + Hash> Graph for SimpleGraph<L> {
    type Location = L;

    fn neighbors(&self, id: &L, buf: &mut Vec<L>) {
        match self.edges.get(id) {
            Some(list) => buf.extend_from_slice(list),
            None => log::trace!("simple graph: neighbors asked for an undeclared location"),
        }
    }
}

/// Contract violations detected by [`SimpleGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError<L> {
    /// An edge leads to a location that was never declared.
    UnknownLocation { from: L, to: L },
}

impl<L: fmt::Display> fmt::Display for GraphError<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocation { from, to } => {
                write!(f, "graph: edge {from} -> {to} leads to an undeclared location")
            }
        }
    }
}

impl<L: fmt::Debug + fmt::Display> std::error::Error for GraphError<L> {}
