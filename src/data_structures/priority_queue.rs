use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-heap of (cost, node) pairs serving as the frontier of a label-setting
/// search
///
/// Entries with equal cost pop in node order, so frontier selection is
/// deterministic within a run. Stale entries for already-finalized nodes are
/// the caller's concern; the queue itself never deduplicates.
#[derive(Debug)]
pub struct FrontierQueue<N, C>
where
    N: Eq + Debug + Ord,
    C: PartialOrd + Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(C, N)>>,
}

impl<N, C> FrontierQueue<N, C>
where
    N: Eq + Debug + Ord,
    C: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the frontier
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given cost onto the frontier
    pub fn push(&mut self, node: N, cost: C) {
        self.heap.push(Reverse((cost, node)));
    }

    /// Removes and returns the cheapest entry
    pub fn pop(&mut self) -> Option<(N, C)> {
        self.heap.pop().map(|Reverse((cost, node))| (node, cost))
    }

    /// Returns the cheapest entry without removing it
    pub fn peek(&self) -> Option<(&N, C)> {
        self.heap.peek().map(|Reverse((cost, node))| (node, *cost))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<N, C> Default for FrontierQueue<N, C>
where
    N: Eq + Debug + Ord,
    C: PartialOrd + Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
