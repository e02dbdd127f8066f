//! Frontier queues deciding the order in which locations are expanded.
//!
//! [`Queue`] is plain FIFO and drives breadth-first search. [`PriorityQueue`]
//! always hands back the lowest priority and drives Dijkstra.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// First-in first-out frontier.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Append `item` at the tail.
    #[inline]
    pub fn put(&mut self, item: T) {
        self.elements.push_back(item);
    }

    /// Remove and return the head, or `None` when the queue is empty.
    #[inline]
    pub fn get(&mut self) -> Option<T> {
        self.elements.pop_front()
    }
}

/// Heap entry ordered by priority, then by item.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    item: T,
}

impl<T: Ord, P: PartialOrd> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord, P: PartialOrd> Eq for Entry<T, P> {}

impl<T: Ord, P: PartialOrd> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap pops the smallest
        // `(priority, item)` pair.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.item.cmp(&self.item))
    }
}

impl<T: Ord, P: PartialOrd> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier.
///
/// Entries are ordered as `(priority, item)` pairs: equal priorities come
/// out smallest item first, so the expansion order never depends on when
/// an item was queued. Priorities that cannot be compared (a NaN cost) are
/// treated as equal and fall back to the item order.
///
/// The same item may be queued several times with different priorities;
/// every copy is returned eventually. Callers decide whether a dequeued copy
/// is still relevant.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = f64> {
    heap: BinaryHeap<Entry<T, P>>,
}

impl<T: Ord, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, P: PartialOrd> PriorityQueue<T, P> {
    /// Create an empty priority queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Insert `item` keyed by `priority`.
    #[inline]
    pub fn put(&mut self, item: T, priority: P) {
        self.heap.push(Entry { priority, item });
    }

    /// Remove and return the item with the lowest priority.
    #[inline]
    pub fn get(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Like [`get`](Self::get) but also returns the priority the item was queued with.
    #[inline]
    pub fn get_with_priority(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.put('a');
        q.put('b');
        q.put('c');
        assert_eq!(q.len(), 3);
        assert_eq!(q.get(), Some('a'));
        q.put('d');
        assert_eq!(q.get(), Some('b'));
        assert_eq!(q.get(), Some('c'));
        assert_eq!(q.get(), Some('d'));
        assert!(q.is_empty());
    }

    #[test]
    fn fifo_get_on_empty_is_none() {
        let mut q: Queue<u8> = Queue::default();
        assert_eq!(q.get(), None);
    }

    #[test]
    fn lowest_priority_first() {
        let mut pq = PriorityQueue::new();
        pq.put("five", 5.0);
        pq.put("one", 1.0);
        pq.put("three", 3.0);
        pq.put("zero", 0.0);
        let order: Vec<_> = std::iter::from_fn(|| pq.get()).collect();
        assert_eq!(order, vec!["zero", "one", "three", "five"]);
    }

    #[test]
    fn ties_break_by_item() {
        let mut pq = PriorityQueue::new();
        pq.put('z', 2.0);
        pq.put('y', 1.0);
        pq.put('x', 2.0);
        pq.put('b', 1.0);
        pq.put('a', 2.0);
        let order: Vec<_> = std::iter::from_fn(|| pq.get()).collect();
        assert_eq!(order, vec!['b', 'y', 'a', 'x', 'z']);
    }

    #[test]
    fn tuple_items_compare_lexicographically() {
        let mut pq = PriorityQueue::new();
        pq.put((2, 0), 3.0);
        pq.put((1, 5), 3.0);
        pq.put((1, 3), 3.0);
        let order: Vec<_> = std::iter::from_fn(|| pq.get()).collect();
        assert_eq!(order, vec![(1, 3), (1, 5), (2, 0)]);
    }

    #[test]
    fn nan_priority_falls_back_to_item() {
        let mut pq = PriorityQueue::new();
        pq.put('b', f64::NAN);
        pq.put('a', f64::NAN);
        assert_eq!(pq.get(), Some('a'));
        assert_eq!(pq.get(), Some('b'));
    }

    #[test]
    fn duplicates_coexist() {
        let mut pq = PriorityQueue::new();
        pq.put('n', 7.0);
        pq.put('n', 4.0);
        pq.put('m', 5.0);
        assert_eq!(pq.len(), 3);
        assert_eq!(pq.get_with_priority(), Some(('n', 4.0)));
        assert_eq!(pq.get_with_priority(), Some(('m', 5.0)));
        assert_eq!(pq.get_with_priority(), Some(('n', 7.0)));
        assert_eq!(pq.get(), None);
    }

    #[test]
    fn integer_priorities() {
        let mut pq: PriorityQueue<&str, i32> = PriorityQueue::new();
        pq.put("far", 10);
        pq.put("near", -2);
        assert_eq!(pq.get(), Some("near"));
        assert_eq!(pq.get(), Some("far"));
        assert!(pq.is_empty());
    }
}
