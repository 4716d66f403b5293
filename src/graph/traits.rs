use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

/// Marker trait for node identifiers.
///
/// Nodes are opaque: they only need equality, hashing, a total order (used as
/// the deterministic tie-break when two frontier nodes carry equal cost) and
/// `Debug` for error messages. Blanket-implemented for every qualifying type.
pub trait Node: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Node for T {}

/// Trait representing a weighted directed graph
///
/// The graph is read-only for the lifetime of any search; search engines take
/// it by shared reference and never mutate it.
pub trait Graph<N, W>: Debug
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    ///
    /// Counts every node the graph knows about, including sink nodes that
    /// only ever appear as a neighbor of some other node.
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes in the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the weighted outgoing edges of a node
    ///
    /// Nodes without outgoing edges (including sinks and unknown nodes) yield
    /// an empty iterator; asking is never an error.
    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}
