// ----------------------------
// Benchmark graph generators
// ----------------------------

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use bellman_core::{Graph, ShortestPaths};
use common::types::Edge;

pub const NUM_VERTICES: usize = 2_000;
pub const NUM_EDGES: usize = 20_000;
pub const SEED: u64 = 0x5EED;

/// Random sparse graph with non-negative weights, so no negative cycle exists.
///
/// Vertex 1 gets an edge to every tenth vertex to keep most of the graph reachable.
pub fn generate_random_graph(num_vertices: usize, num_edges: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);

    let spokes = (2..=num_vertices).step_by(10).map(|v| Edge::new(1, v, 50));
    let random = (0..num_edges).map(|_| {
        let from = rng.random_range(1..=num_vertices);
        let to = rng.random_range(1..=num_vertices);
        Edge::new(from, to, rng.random_range(0..100))
    });
    let edges: Vec<Edge> = spokes.chain(random).collect();

    Graph::from_edges(num_vertices, edges).expect("generated endpoints are in range")
}

/// Chain `1 -> 2 -> ... -> n` with its edges listed back to front.
///
/// Each pass can only extend the known prefix by one hop, so the engine needs
/// all `n - 1` passes.
pub fn generate_reversed_chain(num_vertices: usize) -> Graph {
    let edges: Vec<Edge> = (1..num_vertices)
        .rev()
        .map(|v| Edge::new(v, v + 1, 1))
        .collect();

    Graph::from_edges(num_vertices, edges).expect("chain endpoints are in range")
}

/// Sum of all finite distances, so the work cannot be optimized away.
pub fn checksum(result: &ShortestPaths) -> i64 {
    result
        .state
        .distances()
        .iter()
        .filter_map(|d| d.finite())
        .sum()
}
