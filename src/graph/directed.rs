use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::traits::{Graph, Node};
use crate::{Error, Result};

/// A directed graph implementation using nested adjacency maps
///
/// Each node maps to a neighbor-to-weight map. Sink nodes need not carry an
/// adjacency entry of their own; they are still tracked in the node set so
/// searches can seed them with the unreachable sentinel.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each node: node -> {neighbor -> weight}
    adjacency: HashMap<N, HashMap<N, W>>,

    /// Every node referenced anywhere in the graph, sinks included
    nodes: HashSet<N>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: HashMap::new(),
            nodes: HashSet::new(),
        }
    }

    /// Builds a graph from a nested adjacency map, validating every weight
    ///
    /// Fails with [`Error::NegativeWeight`] on any negative weight and with
    /// [`Error::InvalidGraph`] on any non-finite weight. Validation happens
    /// before the graph is assembled; a rejected map produces no graph.
    pub fn from_adjacency(adjacency: HashMap<N, HashMap<N, W>>) -> Result<Self> {
        for (from, edges) in &adjacency {
            for (to, weight) in edges {
                Self::validate_weight(from, to, *weight)?;
            }
        }

        let mut nodes: HashSet<N> = HashSet::with_capacity(adjacency.len());
        for (from, edges) in &adjacency {
            nodes.insert(from.clone());
            for to in edges.keys() {
                nodes.insert(to.clone());
            }
        }

        Ok(DirectedGraph { adjacency, nodes })
    }

    /// Adds a node with no edges; a no-op if the node already exists
    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node);
    }

    /// Adds a directed edge, inserting both endpoints as nodes
    ///
    /// An existing edge between the same endpoints has its weight replaced.
    /// Fails on negative or non-finite weights, leaving the graph unchanged.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        Self::validate_weight(&from, &to, weight)?;

        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.adjacency
            .entry(from)
            .or_insert_with(HashMap::new)
            .insert(to, weight);

        Ok(())
    }

    fn validate_weight(from: &N, to: &N, weight: W) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::InvalidGraph(format!(
                "non-finite weight {:?} on edge {:?} -> {:?}",
                weight, from, to
            )));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(format!(
                "{:?} on edge {:?} -> {:?}",
                weight, from, to
            )));
        }
        Ok(())
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Node,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(to, weight)| (to, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }
}
