use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::graph::Graph;
use super::paths::{PathState, ReporterWarning, ShortestPaths, Snapshot};
use super::traits::{NoopReporter, ShortestPathSolver, StepReporter};
use common::{
    error::Error,
    types::{Distance, Edge, VertexId},
};

/// How vertices affected by a negative cycle are marked after the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleMarking {
    /// One scan over the edges in order. Every vertex still relaxable after the
    /// main loop is marked, and so is the target of any later edge leaving a
    /// marked vertex. Vertices whose incoming edges come earlier in the scan
    /// can stay finite.
    #[default]
    SinglePass,
    /// Marks every vertex reachable from a vertex the scan finds relaxable.
    Closure,
}

/// Bellman-Ford single-source shortest paths with per-pass reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellmanFordSolver {
    pub cycle_marking: CycleMarking,
    /// Stop after the first pass that changes nothing.
    pub early_exit: bool,
}

impl Default for BellmanFordSolver {
    fn default() -> Self {
        Self {
            cycle_marking: CycleMarking::SinglePass,
            early_exit: true,
        }
    }
}

impl BellmanFordSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cycle_marking(mut self, cycle_marking: CycleMarking) -> Self {
        self.cycle_marking = cycle_marking;
        self
    }

    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Runs without a reporter.
    pub fn solve(&self, graph: &Graph, source: VertexId) -> Result<ShortestPaths, Error> {
        self.shortest_paths_from(graph, source, &mut NoopReporter)
    }
}

impl ShortestPathSolver for BellmanFordSolver {
    /// Runs up to `V - 1` relaxation passes over the edges in insertion order,
    /// reporting after every pass, then marks cycle-affected vertices.
    ///
    /// # Returns
    /// - `Ok(paths)` → final distances and predecessors, plus any reporter warnings.
    /// - `Err(Error::InvalidVertex)` → `source` is out of range; nothing ran.
    fn shortest_paths_from(
        &self,
        graph: &Graph,
        source: VertexId,
        reporter: &mut dyn StepReporter,
    ) -> Result<ShortestPaths, Error> {
        graph.validate_vertex(source)?;

        let num_vertices = graph.num_vertices();
        let edges = graph.edges();
        let mut state = PathState::init(num_vertices, source);
        let mut warnings = Vec::new();
        let mut passes = 0;

        // With a single vertex no pass is needed at all.
        let mut converged = num_vertices <= 1;

        for pass in 1..num_vertices {
            let changed = relax_pass(edges, &mut state);
            passes = pass;
            debug!(pass, changed, "relaxation pass complete");

            let snapshot = Snapshot {
                pass,
                state: &state,
            };
            if let Err(e) = reporter.on_step(&snapshot) {
                warn!(pass, error = %e, "step reporter failed, continuing");
                warnings.push(ReporterWarning {
                    pass,
                    message: e.to_string(),
                });
            }

            if !changed {
                converged = true;
                if self.early_exit {
                    break;
                }
            }
        }

        let marked = mark_negative_cycles(edges, state.distances(), self.cycle_marking);
        state.distances_mut().copy_from_slice(&marked);

        let result = ShortestPaths {
            source,
            state,
            passes,
            converged,
            warnings,
        };

        info!(
            source,
            passes,
            converged,
            cycle_affected = result.cycle_affected().len(),
            "shortest paths computed"
        );

        Ok(result)
    }
}

/// One full scan over `edges` in order, relaxing each edge against `state`.
///
/// Returns true if any distance improved.
pub fn relax_pass(edges: &[Edge], state: &mut PathState) -> bool {
    let mut changed = false;

    for edge in edges {
        let Some(candidate) = state.distance(edge.from).extend(edge.weight) else {
            continue;
        };
        if Distance::improves_on(candidate, state.distance(edge.to)) {
            state.set(edge.to, Distance::Finite(candidate), edge.from);
            changed = true;
        }
    }

    changed
}

/// Marks vertices whose distance could still improve as `NegativeCycle`.
///
/// `distances` is indexed by `vertex - 1`, as [`PathState::distances`] is.
/// Returns the updated vector and leaves the input untouched.
pub fn mark_negative_cycles(
    edges: &[Edge],
    distances: &[Distance],
    mode: CycleMarking,
) -> Vec<Distance> {
    match mode {
        CycleMarking::SinglePass => mark_single_pass(edges, distances),
        CycleMarking::Closure => mark_closure(edges, distances),
    }
}

fn mark_single_pass(edges: &[Edge], distances: &[Distance]) -> Vec<Distance> {
    let mut marked = distances.to_vec();

    // Relaxability is judged on the post-loop distances. A vertex marked
    // earlier in the scan also marks the targets of its later edges, but the
    // scan is not repeated, so edges listed before the marking are not revisited.
    for edge in edges {
        let from_marked = marked[edge.from - 1] == Distance::NegativeCycle;
        let relaxable = distances[edge.from - 1]
            .extend(edge.weight)
            .is_some_and(|candidate| Distance::improves_on(candidate, distances[edge.to - 1]));

        if from_marked || relaxable {
            marked[edge.to - 1] = Distance::NegativeCycle;
        }
    }

    marked
}

fn mark_closure(edges: &[Edge], distances: &[Distance]) -> Vec<Distance> {
    let mut marked = distances.to_vec();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    for edge in edges {
        let Some(candidate) = distances[edge.from - 1].extend(edge.weight) else {
            continue;
        };
        if Distance::improves_on(candidate, distances[edge.to - 1])
            && marked[edge.to - 1] != Distance::NegativeCycle
        {
            marked[edge.to - 1] = Distance::NegativeCycle;
            queue.push_back(edge.to);
        }
    }

    if queue.is_empty() {
        return marked;
    }

    let mut outgoing: Vec<Vec<VertexId>> = vec![Vec::new(); distances.len()];
    for edge in edges {
        outgoing[edge.from - 1].push(edge.to);
    }

    while let Some(u) = queue.pop_front() {
        for &v in &outgoing[u - 1] {
            if marked[v - 1] != Distance::NegativeCycle {
                marked[v - 1] = Distance::NegativeCycle;
                queue.push_back(v);
            }
        }
    }

    marked
}
