pub mod breadth_first;
pub mod dijkstra;
pub mod traits;

pub use traits::ShortestPathAlgorithm;

use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::Node;
use crate::{Error, Result};

/// Backpointer recorded for a node when its best-known cost was set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predecessor<N> {
    /// The node's best cost was derived directly from the search source
    Source,
    /// The node's best cost was derived through the given node
    Node(N),
}

/// Result of a shortest path algorithm execution
///
/// Holds the final cost table and predecessor map of one search. `None` in
/// the cost table is the unreachable sentinel (conceptually +infinity); such
/// nodes carry no predecessor entry.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    /// Best known cost from the source to each node, `None` when unreachable
    pub distances: HashMap<N, Option<W>>,

    /// Predecessor links in the shortest path tree
    pub predecessors: HashMap<N, Predecessor<N>>,

    /// Source node of the search
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the cost from the source to a node, `None` if unreachable or
    /// unknown
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// Reconstructs the shortest path from the source to a target as an
    /// ordered node sequence
    ///
    /// Walks predecessor links backward from the target until the source
    /// marker is hit, then reverses. Fails with [`Error::Unreachable`] when
    /// the target has no predecessor chain, and with [`Error::CorruptPath`]
    /// if the walk exceeds the node count without reaching the source marker
    /// (a cyclic or broken predecessor map, which correct relaxation never
    /// produces).
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        if !self.predecessors.contains_key(target) {
            return Err(Error::Unreachable(format!("{:?}", target)));
        }

        let max_steps = self.distances.len().max(self.predecessors.len());
        let mut path = vec![target.clone()];
        let mut current = target.clone();

        loop {
            match self.predecessors.get(&current) {
                Some(Predecessor::Source) => break,
                Some(Predecessor::Node(pred)) => {
                    current = pred.clone();
                    path.push(current.clone());
                }
                None => {
                    // A chain that dead-ends before the source marker means
                    // the target never had a complete path
                    return Err(Error::Unreachable(format!("{:?}", target)));
                }
            }

            if path.len() > max_steps {
                return Err(Error::CorruptPath(format!("{:?}", target)));
            }
        }

        path.reverse();
        Ok(path)
    }
}
