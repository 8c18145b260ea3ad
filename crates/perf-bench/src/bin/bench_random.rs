use std::hint::black_box;
use std::time::Instant;

use bellman_core::BellmanFordSolver;
use perf_bench::*;

fn main() {
    let graph = generate_random_graph(NUM_VERTICES, NUM_EDGES, SEED);
    let solver = BellmanFordSolver::new();

    let start_time = Instant::now();
    let result = solver.solve(&graph, 1).expect("vertex 1 exists");
    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum(&result));

    println!(
        "--- Random Graph Benchmark ({} Vertices, {} Edges) ---",
        graph.num_vertices(),
        graph.num_edges()
    );
    println!("Passes: {} (converged: {})", result.passes, result.converged);
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
