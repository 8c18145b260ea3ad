use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::labels::{predecessor_label, vertex_label};
use bellman_core::{PathState, Snapshot};
use bellman_core::traits::{ReporterError, StepReporter};
use common::types::Distance;

/// One row of a per-step table.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TableRow {
    #[serde(rename = "Vertex")]
    pub vertex: String,

    #[serde(rename = "Distance")]
    pub distance: String,

    #[serde(rename = "Predecessor")]
    pub predecessor: String,
}

/// Converts a state into table rows, one per vertex in id order.
///
/// Unreachable vertices always show "-" as predecessor.
pub fn table_rows(state: &PathState) -> Vec<TableRow> {
    state
        .iter()
        .map(|(vertex, distance, predecessor)| TableRow {
            vertex: vertex_label(vertex),
            distance: distance.to_string(),
            predecessor: match distance {
                Distance::Unreachable => "-".to_string(),
                _ => predecessor_label(predecessor),
            },
        })
        .collect()
}

/// Writes the `Vertex,Distance,Predecessor` table for `state` to `path`.
pub fn write_table(path: &Path, state: &PathState) -> Result<(), Error> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
    for row in table_rows(state) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Step reporter that writes one CSV table per pass into `output_dir`.
///
/// Files are named `<prefix><pass>.csv`. The directory is created on first use.
pub struct CsvTableReporter {
    output_dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl CsvTableReporter {
    pub fn new(output_dir: PathBuf, prefix: String) -> Self {
        CsvTableReporter {
            output_dir,
            prefix,
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, pass: usize) -> PathBuf {
        self.output_dir.join(format!("{}{}.csv", self.prefix, pass))
    }

    /// Tables written so far, in pass order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn export(&mut self, snapshot: &Snapshot<'_>) -> Result<(), Error> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(snapshot.pass);
        write_table(&path, snapshot.state)?;
        self.written.push(path);
        Ok(())
    }
}

impl StepReporter for CsvTableReporter {
    /// Failures are returned to the engine, which logs them and records a warning.
    fn on_step(&mut self, snapshot: &Snapshot<'_>) -> Result<(), ReporterError> {
        self.export(snapshot).map_err(ReporterError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_graph;
    use bellman_core::traits::ShortestPathSolver;
    use bellman_core::BellmanFordSolver;
    use tempfile::{NamedTempFile, tempdir};

    const PREFIX: &str = "step_";

    #[test]
    fn test_writes_one_table_per_pass() {
        let dir = tempdir().expect("Failed to create temp dir");
        let graph = sample_graph().unwrap();
        let mut reporter = CsvTableReporter::new(dir.path().join("tables"), PREFIX.to_string());

        let result = BellmanFordSolver::new()
            .shortest_paths_from(&graph, 1, &mut reporter)
            .unwrap();

        assert!(result.warnings.is_empty());
        assert_eq!(reporter.written().len(), 3);
        for pass in 1..=3 {
            assert!(reporter.path_for(pass).exists(), "Missing table for pass {}", pass);
        }

        let first = fs::read_to_string(reporter.path_for(1)).unwrap();
        assert_eq!(
            first,
            "Vertex,Distance,Predecessor\nA,0,-\nB,3,E\nC,2,A\nD,6,B\nE,5,C\n"
        );

        let last = fs::read_to_string(reporter.path_for(3)).unwrap();
        assert_eq!(
            last,
            "Vertex,Distance,Predecessor\nA,0,-\nB,3,E\nC,2,A\nD,5,B\nE,5,C\n"
        );
    }

    #[test]
    fn test_unreachable_rows() {
        let graph = sample_graph().unwrap();
        let result = BellmanFordSolver::new().solve(&graph, 4).unwrap();

        let rows = table_rows(&result.state);
        assert_eq!(
            rows[0],
            TableRow {
                vertex: "A".to_string(),
                distance: "INF".to_string(),
                predecessor: "-".to_string(),
            }
        );
        assert_eq!(rows[3].distance, "0");
        assert_eq!(rows[3].predecessor, "-");
    }

    #[test]
    fn test_unwritable_directory_becomes_warning() {
        // A regular file where the output directory should be.
        let blocker = NamedTempFile::new().expect("Failed to create temp file");
        let graph = sample_graph().unwrap();
        let mut reporter = CsvTableReporter::new(blocker.path().to_path_buf(), PREFIX.to_string());

        let result = BellmanFordSolver::new()
            .shortest_paths_from(&graph, 1, &mut reporter)
            .unwrap();

        assert_eq!(result.passes, 3);
        assert_eq!(result.warnings.len(), 3);
        assert_eq!(result.warnings[0].pass, 1);
        assert!(
            result.warnings[0].message.starts_with("I/O error"),
            "Unexpected warning: {}",
            result.warnings[0].message
        );
        assert!(reporter.written().is_empty());
        assert_eq!(result.distance(2), Distance::Finite(3));
    }
}
