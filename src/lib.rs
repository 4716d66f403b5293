//! Greedy SSSP - Label-Setting Single-Source Shortest Paths
//!
//! This library computes single-source shortest paths over weighted, directed
//! graphs with non-negative edge weights using a greedy label-setting loop
//! (Dijkstra's algorithm): each iteration finalizes the cheapest unprocessed
//! node, relaxes its outgoing edges, and records predecessor links, until no
//! reachable node remains.
//!
//! Non-negative weights are a hard requirement; negative weights are rejected
//! at graph construction. An unweighted breadth-first search over the same
//! graph abstraction is provided for hop-count and existence queries.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    breadth_first::BreadthFirst, dijkstra::Dijkstra, Predecessor, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Source node not found in graph")]
    SourceNotFound,

    #[error("Node {0} is unreachable from the source")]
    Unreachable(String),

    #[error("Corrupt predecessor map while reconstructing path to {0}")]
    CorruptPath(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
