use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::error::Error;
use super::labels::vertex_label;
use bellman_core::Graph;

/// Writes `graph` in Graphviz DOT form, one edge per line in edge order.
pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;
    for edge in graph.edges() {
        writeln!(
            out,
            "{} -> {} [label=\"{}\"];",
            vertex_label(edge.from),
            vertex_label(edge.to),
            edge.weight
        )?;
    }
    writeln!(out, "}}")
}

/// Writes the DOT file to `path`, creating its parent directory if needed.
pub fn export_graph(graph: &Graph, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    write_dot(graph, &mut out)?;
    out.flush()?;
    Ok(())
}
