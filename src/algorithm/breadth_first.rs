use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use log::trace;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Node};
use crate::{Error, Result};

/// Unweighted breadth-first search over the same graph abstraction
///
/// The companion to the weighted engine for queries where edge weights are
/// irrelevant: existence of a node matching a predicate, or shortest hop
/// counts. Each node is enqueued when first seen and expanded exactly once.
#[derive(Debug, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    /// Creates a new breadth-first search instance
    pub fn new() -> Self {
        BreadthFirst
    }

    /// Returns the first node in breadth order from `start` satisfying the
    /// predicate, or `None` when the reachable set is exhausted
    ///
    /// The start node itself is not tested; the search walks its neighbors
    /// outward. Fails with [`Error::SourceNotFound`] for an unknown start.
    pub fn find<N, W, G, F>(&self, graph: &G, start: &N, mut predicate: F) -> Result<Option<N>>
    where
        N: Node,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
        F: FnMut(&N) -> bool,
    {
        if !graph.has_node(start) {
            return Err(Error::SourceNotFound);
        }

        let mut queue: VecDeque<N> = VecDeque::new();
        let mut seen: HashSet<N> = HashSet::new();

        seen.insert(start.clone());
        for (neighbor, _) in graph.neighbors(start) {
            if seen.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }

        while let Some(node) = queue.pop_front() {
            if predicate(&node) {
                trace!("breadth-first match at {:?}", node);
                return Ok(Some(node));
            }
            for (neighbor, _) in graph.neighbors(&node) {
                if seen.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
        }

        Ok(None)
    }

    /// Returns the shortest hop count from `start` for every reachable node
    ///
    /// The start node maps to zero. Nodes absent from the returned map are
    /// unreachable. Fails with [`Error::SourceNotFound`] for an unknown
    /// start.
    pub fn hop_counts<N, W, G>(&self, graph: &G, start: &N) -> Result<HashMap<N, usize>>
    where
        N: Node,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
    {
        if !graph.has_node(start) {
            return Err(Error::SourceNotFound);
        }

        let mut hops: HashMap<N, usize> = HashMap::new();
        let mut queue: VecDeque<N> = VecDeque::new();

        hops.insert(start.clone(), 0);
        queue.push_back(start.clone());

        while let Some(node) = queue.pop_front() {
            let depth = hops[&node];
            for (neighbor, _) in graph.neighbors(&node) {
                if !hops.contains_key(neighbor) {
                    hops.insert(neighbor.clone(), depth + 1);
                    queue.push_back(neighbor.clone());
                }
            }
        }

        Ok(hops)
    }
}
