use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use super::config::ExportConfig;
use super::error::Error;
use super::labels::vertex_label;
use super::table::CsvTableReporter;
use bellman_core::traits::{NoopReporter, ShortestPathSolver};
use bellman_core::{BellmanFordSolver, Graph, ShortestPaths};
use common::types::VertexId;

/// Runs one source, writing per-pass tables into `table_dir` when export is enabled.
pub fn run_single(
    graph: &Graph,
    source: VertexId,
    solver: BellmanFordSolver,
    export: &ExportConfig,
    table_dir: PathBuf,
) -> Result<ShortestPaths, Error> {
    if !export.enabled {
        return Ok(solver.shortest_paths_from(graph, source, &mut NoopReporter)?);
    }

    let mut reporter = CsvTableReporter::new(table_dir, export.table_prefix.clone());
    let result = solver.shortest_paths_from(graph, source, &mut reporter)?;
    info!(
        source = %vertex_label(source),
        tables = reporter.written().len(),
        "step tables written"
    );
    Ok(result)
}

/// Runs every vertex as a source on tokio's blocking pool.
///
/// The graph is shared read-only; each run owns its state and writes its
/// tables under `<output_dir>/<source label>/`. Results come back in vertex order.
pub async fn run_all_sources(
    graph: Arc<Graph>,
    solver: BellmanFordSolver,
    export: ExportConfig,
) -> Result<Vec<ShortestPaths>, Error> {
    let handles: Vec<JoinHandle<Result<ShortestPaths, Error>>> = graph
        .vertices()
        .map(|source| {
            let graph = Arc::clone(&graph);
            let export = export.clone();
            tokio::task::spawn_blocking(move || {
                let table_dir = export.output_dir.join(vertex_label(source));
                run_single(&graph, source, solver, &export, table_dir)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| Error::TaskJoinError(e.to_string()))??;
        results.push(result);
    }

    Ok(results)
}
