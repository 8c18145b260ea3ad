use bellman_core::Graph;
use common::{error::Error, types::VertexId};

/// Vertex count of the built-in example graph (A..E).
pub const SAMPLE_VERTICES: usize = 5;

/// Edges of the built-in example graph, in relaxation order.
///
/// B -> C -> E -> B is a cycle of total weight 0.
pub const SAMPLE_EDGES: [(VertexId, VertexId, i32); 6] = [
    (1, 2, 4),  // A -> B
    (1, 3, 2),  // A -> C
    (2, 3, -1), // B -> C
    (2, 4, 2),  // B -> D
    (3, 5, 3),  // C -> E
    (5, 2, -2), // E -> B
];

pub fn sample_graph() -> Result<Graph, Error> {
    Graph::from_edges(SAMPLE_VERTICES, SAMPLE_EDGES)
}
