//! Letter labels for vertex ids: 1 -> "A", 26 -> "Z", 27 -> "AA".

use bellman_core::Graph;
use common::types::VertexId;

use super::error::Error;

const ALPHABET_LEN: usize = 26;

/// Bijective base-26 label of a vertex id. Id 0 is not a vertex and maps to "?".
pub fn vertex_label(vertex: VertexId) -> String {
    if vertex == 0 {
        return "?".to_string();
    }

    let mut n = vertex;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % ALPHABET_LEN;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / ALPHABET_LEN;
    }
    letters.iter().rev().collect()
}

/// Label shown in the predecessor column; "-" when there is none.
pub fn predecessor_label(predecessor: Option<VertexId>) -> String {
    predecessor.map_or_else(|| "-".to_string(), vertex_label)
}

/// Inverse of [`vertex_label`]. Case-insensitive; surrounding whitespace is ignored.
pub fn parse_label(label: &str) -> Option<VertexId> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    label.chars().try_fold(0usize, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        acc.checked_mul(ALPHABET_LEN)?.checked_add(digit)
    })
}

/// Resolves a user-supplied label to a vertex of `graph`.
pub fn resolve_label(label: &str, graph: &Graph) -> Result<VertexId, Error> {
    let vertex = parse_label(label).ok_or_else(|| Error::UnknownVertexLabel(label.to_string()))?;
    graph.validate_vertex(vertex)?;
    Ok(vertex)
}
