use super::graph::Graph;
use super::paths::{ShortestPaths, Snapshot, StepRecord};
use common::{error::Error, types::VertexId};

/// Error type reporters hand back to the engine. The engine only logs it.
pub type ReporterError = Box<dyn std::error::Error + Send + Sync>;

/// Sink the engine calls once per completed relaxation pass.
///
/// Implementations decide what to do with the state (write a table, log, keep a
/// copy). A returned error never aborts the run; the engine records it as a
/// warning on the result and carries on.
pub trait StepReporter {
    fn on_step(&mut self, snapshot: &Snapshot<'_>) -> Result<(), ReporterError>;
}

/// Reporter that discards every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl StepReporter for NoopReporter {
    fn on_step(&mut self, _snapshot: &Snapshot<'_>) -> Result<(), ReporterError> {
        Ok(())
    }
}

/// Reporter that keeps an owned copy of every snapshot, in order.
#[derive(Debug, Default, Clone)]
pub struct SnapshotRecorder {
    pub records: Vec<StepRecord>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepReporter for SnapshotRecorder {
    fn on_step(&mut self, snapshot: &Snapshot<'_>) -> Result<(), ReporterError> {
        self.records.push(snapshot.to_record());
        Ok(())
    }
}

/// Trait for single-source shortest path solvers that report per-pass state.
pub trait ShortestPathSolver {
    /// Computes shortest paths from `source`, calling `reporter` after each pass.
    ///
    /// Returns `Err(Error::InvalidVertex)` before doing any work if `source` is
    /// not a vertex of `graph`. Negative cycles are part of the result, not errors.
    fn shortest_paths_from(
        &self,
        graph: &Graph,
        source: VertexId,
        reporter: &mut dyn StepReporter,
    ) -> Result<ShortestPaths, Error>;
}
