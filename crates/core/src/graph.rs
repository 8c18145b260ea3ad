use std::ops::RangeInclusive;

use common::error::Error;
use common::types::{Edge, VertexId};

/// Directed weighted graph with a fixed vertex count.
///
/// Vertices are the ids `1..=num_vertices`. Edges are kept in insertion order,
/// which is also the order every relaxation pass scans them in; when two edges
/// tie, the earlier one decides the recorded predecessor.
///
/// Edges can only be appended. Solvers borrow the graph immutably, so nothing
/// can be appended while a run is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(num_vertices: usize) -> Self {
        Self::with_capacity(num_vertices, 0)
    }

    /// Creates an empty graph with room for `num_edges` edges.
    pub fn with_capacity(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::with_capacity(num_edges),
        }
    }

    /// Builds a graph from an ordered edge list.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertex` for the first edge with an endpoint outside
    /// `1..=num_vertices`. Nothing is built in that case.
    pub fn from_edges<I, E>(num_vertices: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        let mut graph = Self::with_capacity(num_vertices, edges.len());
        for edge in &edges {
            graph.validate_vertex(edge.from)?;
            graph.validate_vertex(edge.to)?;
        }
        graph.edges = edges;
        Ok(graph)
    }

    /// Appends the directed edge `from -> to` with the given weight.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertex` if either endpoint is out of range; the
    /// graph is left unchanged.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: i32) -> Result<(), Error> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over all vertex ids in ascending order.
    pub fn vertices(&self) -> RangeInclusive<VertexId> {
        1..=self.num_vertices
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        (1..=self.num_vertices).contains(&vertex)
    }

    pub fn validate_vertex(&self, vertex: VertexId) -> Result<(), Error> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut graph = Graph::new(3);
        graph.add_edge(2, 3, 5).unwrap();
        graph.add_edge(1, 2, -1).unwrap();

        assert_eq!(
            graph.edges(),
            &[Edge::new(2, 3, 5), Edge::new(1, 2, -1)]
        );
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn add_edge_rejects_out_of_range_endpoints() {
        let mut graph = Graph::new(3);

        assert_eq!(
            graph.add_edge(0, 1, 1),
            Err(Error::InvalidVertex {
                vertex: 0,
                num_vertices: 3
            })
        );
        assert_eq!(
            graph.add_edge(1, 4, 1),
            Err(Error::InvalidVertex {
                vertex: 4,
                num_vertices: 3
            })
        );
        assert_eq!(graph.num_edges(), 0, "Rejected edges must not be stored.");
    }

    #[test]
    fn from_edges_rejects_whole_batch() {
        let result = Graph::from_edges(2, [Edge::new(1, 2, 1), Edge::new(2, 3, 1)]);
        assert!(matches!(
            result,
            Err(Error::InvalidVertex { vertex: 3, .. })
        ));
    }

    #[test]
    fn vertices_are_one_based() {
        let graph = Graph::new(4);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(!graph.contains(0));
        assert!(graph.contains(4));
        assert!(!graph.contains(5));
    }

    #[test]
    fn empty_graph_has_no_valid_vertex() {
        let graph = Graph::new(0);
        assert!(graph.validate_vertex(1).is_err());
        assert_eq!(graph.vertices().count(), 0);
    }
}
