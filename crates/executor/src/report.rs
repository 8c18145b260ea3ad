use std::fmt::Write;

use super::labels::vertex_label;
use bellman_core::ShortestPaths;
use common::types::Distance;

/// Renders the final per-vertex distances as plain text.
///
/// Cycle-affected vertices read `-INF (negative cycle)` so they cannot be
/// confused with unreachable ones (`INF`).
pub fn render_report(result: &ShortestPaths) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Distances from vertex {}:", vertex_label(result.source));

    for (vertex, distance, _) in result.state.iter() {
        let label = vertex_label(vertex);
        let _ = match distance {
            Distance::NegativeCycle => writeln!(out, "Vertex {}: -INF (negative cycle)", label),
            other => writeln!(out, "Vertex {}: {}", label, other),
        };
    }

    for warning in &result.warnings {
        let _ = writeln!(out, "warning: pass {}: {}", warning.pass, warning.message);
    }

    out
}
