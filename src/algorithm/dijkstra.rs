use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{Predecessor, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::FrontierQueue;
use crate::graph::{Graph, Node};
use crate::{Error, Result};

/// Classic Dijkstra label-setting algorithm
///
/// Correct only for non-negative edge weights: once a node is popped with the
/// minimum cost among unprocessed nodes, no later relaxation can undercut it,
/// so each node is finalized exactly once and never revisited.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Node,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound);
        }

        // Seed every known node with the unreachable sentinel, the source
        // with zero. Direct-neighbor seeding is left to the first loop
        // iteration, which performs the identical relaxations.
        let mut distances: HashMap<N, Option<W>> = graph
            .nodes()
            .map(|node| (node.clone(), None))
            .collect();
        let mut predecessors: HashMap<N, Predecessor<N>> = HashMap::new();
        let mut processed: HashSet<N> = HashSet::new();

        distances.insert(source.clone(), Some(W::zero()));
        predecessors.insert(source.clone(), Predecessor::Source);

        let mut frontier = FrontierQueue::new();
        frontier.push(source.clone(), W::zero());

        // Main label-setting loop: finalize the cheapest unprocessed node,
        // relax its outgoing edges, repeat until the frontier drains.
        while let Some((current, cost)) = frontier.pop() {
            // Stale entry for a node already finalized at a lower cost
            if !processed.insert(current.clone()) {
                continue;
            }

            for (neighbor, weight) in graph.neighbors(&current) {
                let candidate = cost + weight;

                let should_update = match distances.get(neighbor).copied().flatten() {
                    None => true,
                    Some(best) => candidate < best,
                };

                // Cost and predecessor change together or not at all
                if should_update {
                    trace!(
                        "relax {:?} -> {:?}: cost {:?}",
                        current, neighbor, candidate
                    );
                    distances.insert(neighbor.clone(), Some(candidate));
                    predecessors.insert(neighbor.clone(), Predecessor::Node(current.clone()));
                    frontier.push(neighbor.clone(), candidate);
                }
            }
        }

        debug!(
            "dijkstra from {:?}: finalized {} of {} nodes",
            source,
            processed.len(),
            distances.len()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
