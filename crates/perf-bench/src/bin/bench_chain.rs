use std::hint::black_box;
use std::time::Instant;

use bellman_core::BellmanFordSolver;
use perf_bench::*;

fn main() {
    let graph = generate_reversed_chain(NUM_VERTICES);
    let solver = BellmanFordSolver::new();

    let start_time = Instant::now();
    let result = solver.solve(&graph, 1).expect("vertex 1 exists");
    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum(&result));

    println!("--- Reversed Chain Benchmark ({} Vertices) ---", NUM_VERTICES);
    println!("Passes: {}", result.passes);
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
