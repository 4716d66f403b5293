use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::DirectedGraph;

/// Generates a G(n, p) random directed graph with uniform random weights
/// Returns a directed graph with OrderedFloat<f64> weights in [1, 100)
pub fn generate_gnp(n: usize, p: f64) -> DirectedGraph<usize, OrderedFloat<f64>> {
    assert!((0.0..=1.0).contains(&p), "p must be a probability");

    let mut graph = DirectedGraph::new();
    let mut rng = rand::thread_rng();

    for v in 0..n {
        graph.add_node(v);
    }

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(p) {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                // Weights are drawn non-negative, insertion cannot fail
                let _ = graph.add_edge(from, to, weight);
            }
        }
    }

    graph
}

/// Generates a 4-connected grid graph with dimensions width*height
/// Returns a directed graph with unit OrderedFloat<f64> weights
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for v in 0..(width * height) {
        graph.add_node(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x > 0 {
                let _ = graph.add_edge(current, get_index(x - 1, y), OrderedFloat(1.0));
            }
            if x < width - 1 {
                let _ = graph.add_edge(current, get_index(x + 1, y), OrderedFloat(1.0));
            }
            if y > 0 {
                let _ = graph.add_edge(current, get_index(x, y - 1), OrderedFloat(1.0));
            }
            if y < height - 1 {
                let _ = graph.add_edge(current, get_index(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    graph
}
