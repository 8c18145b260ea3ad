pub mod graph;
pub mod paths;
pub mod solver;
pub mod traits;

pub use graph::Graph;
pub use paths::{PathState, ReporterWarning, ShortestPaths, Snapshot, StepRecord};
pub use solver::{BellmanFordSolver, CycleMarking};
