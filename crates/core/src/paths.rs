use common::error::Error;
use common::types::{Distance, VertexId};

/// Distance and predecessor vectors of a run, indexed by vertex id.
///
/// Storage is zero-based (`id - 1`); every accessor takes a vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
}

impl PathState {
    /// Initial state of a run: every vertex unreachable except `source` at 0,
    /// and no predecessors.
    pub(crate) fn init(num_vertices: usize, source: VertexId) -> Self {
        let mut distances = vec![Distance::Unreachable; num_vertices];
        distances[source - 1] = Distance::Finite(0);
        Self {
            distances,
            predecessors: vec![None; num_vertices],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.distances.len()
    }

    /// # Panics
    /// Panics if `vertex` is not in `1..=num_vertices`.
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex - 1]
    }

    /// # Panics
    /// Panics if `vertex` is not in `1..=num_vertices`.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex - 1]
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Yields `(vertex, distance, predecessor)` in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Distance, Option<VertexId>)> + '_ {
        self.distances
            .iter()
            .zip(&self.predecessors)
            .enumerate()
            .map(|(i, (d, p))| (i + 1, *d, *p))
    }

    pub(crate) fn set(&mut self, vertex: VertexId, distance: Distance, predecessor: VertexId) {
        self.distances[vertex - 1] = distance;
        self.predecessors[vertex - 1] = Some(predecessor);
    }

    pub(crate) fn distances_mut(&mut self) -> &mut [Distance] {
        &mut self.distances
    }
}

/// State after a completed pass, lent to a reporter for one `on_step` call.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// 1-based index of the pass that produced this state.
    pub pass: usize,
    pub state: &'a PathState,
}

impl Snapshot<'_> {
    /// Copies the snapshot out for reporters that keep it past the call.
    pub fn to_record(&self) -> StepRecord {
        StepRecord {
            pass: self.pass,
            state: self.state.clone(),
        }
    }
}

/// Owned copy of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub pass: usize,
    pub state: PathState,
}

/// A reporter failure the engine recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterWarning {
    pub pass: usize,
    pub message: String,
}

/// Final outcome of a single-source run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub state: PathState,
    /// Completed relaxation passes; equals the number of reports made.
    pub passes: usize,
    /// True if a pass without changes was observed, or no pass was needed.
    pub converged: bool,
    pub warnings: Vec<ReporterWarning>,
}

impl ShortestPaths {
    /// # Panics
    /// Panics if `vertex` is not in `1..=V`; check with [`Graph::contains`](crate::Graph::contains) first.
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.state.distance(vertex)
    }

    /// # Panics
    /// Panics if `vertex` is not in `1..=V`.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.state.predecessor(vertex)
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.state
            .distances()
            .iter()
            .any(|d| *d == Distance::NegativeCycle)
    }

    /// Vertices marked as affected by a negative cycle, ascending.
    pub fn cycle_affected(&self) -> Vec<VertexId> {
        self.state
            .iter()
            .filter(|(_, d, _)| *d == Distance::NegativeCycle)
            .map(|(v, _, _)| v)
            .collect()
    }

    /// Rebuilds the path `source -> ... -> target` from the predecessor chain.
    ///
    /// Returns `Ok(None)` when `target` is unreachable or cycle-affected.
    ///
    /// # Errors
    /// `Error::InvalidVertex` if `target` is out of range, and
    /// `Error::BrokenPredecessorChain` if the chain does not reach the source
    /// within `V` steps. The latter only happens for cycle members the
    /// single-pass detector left finite because their edges were scanned
    /// before the marking reached them.
    pub fn path_to(&self, target: VertexId) -> Result<Option<Vec<VertexId>>, Error> {
        let num_vertices = self.state.num_vertices();
        if !(1..=num_vertices).contains(&target) {
            return Err(Error::InvalidVertex {
                vertex: target,
                num_vertices,
            });
        }

        if !self.state.distance(target).is_finite() {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() > num_vertices {
                return Err(Error::BrokenPredecessorChain(target));
            }
            current = self
                .state
                .predecessor(current)
                .ok_or(Error::BrokenPredecessorChain(target))?;
            path.push(current);
        }

        path.reverse();
        Ok(Some(path))
    }
}

#[cfg(test)]
mod paths_tests {
    use super::*;

    fn result_with(state: PathState, source: VertexId) -> ShortestPaths {
        ShortestPaths {
            source,
            state,
            passes: 0,
            converged: true,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn init_sets_only_source() {
        let state = PathState::init(3, 2);
        assert_eq!(
            state.distances(),
            &[
                Distance::Unreachable,
                Distance::Finite(0),
                Distance::Unreachable
            ]
        );
        assert!(state.predecessors().iter().all(Option::is_none));
    }

    #[test]
    fn iter_is_one_based() {
        let mut state = PathState::init(2, 1);
        state.set(2, Distance::Finite(7), 1);

        let rows: Vec<_> = state.iter().collect();
        assert_eq!(
            rows,
            vec![(1, Distance::Finite(0), None), (2, Distance::Finite(7), Some(1))]
        );
    }

    #[test]
    fn path_to_follows_predecessors() {
        let mut state = PathState::init(3, 1);
        state.set(2, Distance::Finite(1), 1);
        state.set(3, Distance::Finite(2), 2);
        let result = result_with(state, 1);

        assert_eq!(result.path_to(3).unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(result.path_to(1).unwrap(), Some(vec![1]));
    }

    #[test]
    fn path_to_unreachable_is_none() {
        let result = result_with(PathState::init(2, 1), 1);
        assert_eq!(result.path_to(2).unwrap(), None);
    }

    #[test]
    fn path_to_detects_looping_chain() {
        let mut state = PathState::init(3, 1);
        state.set(2, Distance::Finite(-4), 3);
        state.set(3, Distance::Finite(-5), 2);
        let result = result_with(state, 1);

        assert_eq!(result.path_to(2), Err(Error::BrokenPredecessorChain(2)));
    }

    #[test]
    #[should_panic]
    fn distance_of_unknown_vertex_panics() {
        let result = result_with(PathState::init(2, 1), 1);
        let _ = result.distance(3);
    }

    #[test]
    #[should_panic]
    fn predecessor_of_vertex_zero_panics() {
        let result = result_with(PathState::init(2, 1), 1);
        let _ = result.predecessor(0);
    }

    #[test]
    fn path_to_rejects_unknown_vertex() {
        let result = result_with(PathState::init(2, 1), 1);
        assert!(matches!(
            result.path_to(3),
            Err(Error::InvalidVertex { vertex: 3, .. })
        ));
    }
}
