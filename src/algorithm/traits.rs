use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, Node};
use crate::Result;

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    ///
    /// Fails with [`crate::Error::SourceNotFound`] when the source is not a
    /// node of the graph. On success the result is fully consistent: every
    /// reachable node carries its true minimum cost and a predecessor chain
    /// back to the source, every unreachable node carries the sentinel.
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
