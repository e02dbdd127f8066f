use std::hash::Hash;

/// Minimal search interface: neighbor enumeration over some location space.
///
/// Enumeration order matters. Both searches expand neighbors in the order
/// they are appended, so the same graph state must always yield the same
/// sequence.
pub trait Graph {
    /// Opaque label of a point in the graph. Only compared and hashed.
    type Location: Clone + Eq + Hash;

    /// Append the neighbors of `id` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, id: &Self::Location, buf: &mut Vec<Self::Location>);
}

/// Graph with weighted edges.
pub trait WeightedGraph: Graph {
    /// Cost of moving from `from` to its neighbor `to`. Must be >= 0.
    ///
    /// Only ever called with a `to` that `neighbors(from)` produced.
    fn cost(&self, from: &Self::Location, to: &Self::Location) -> f64;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Location = G::Location;

    #[inline]
    fn neighbors(&self, id: &Self::Location, buf: &mut Vec<Self::Location>) {
        (**self).neighbors(id, buf);
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for &G {
    #[inline]
    fn cost(&self, from: &Self::Location, to: &Self::Location) -> f64 {
        (**self).cost(from, to)
    }
}
