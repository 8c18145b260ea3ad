use std::fmt;

use crate::types::VertexId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex id (source or edge endpoint) lies outside `1..=num_vertices`.
    InvalidVertex { vertex: VertexId, num_vertices: usize },

    /// Walking predecessors from the given vertex never reached the source.
    BrokenPredecessorChain(VertexId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidVertex {
                vertex,
                num_vertices,
            } => write!(
                f,
                "Vertex {} is out of range (valid ids are 1..={}).",
                vertex, num_vertices
            ),

            Error::BrokenPredecessorChain(v) => write!(
                f,
                "Predecessor chain from vertex {} does not lead back to the source.",
                v
            ),
        }
    }
}

impl std::error::Error for Error {}
