//! Plain-text graph format.
//!
//! ```text
//! <rows> <columns>
//! <neighbour>:<weight> <neighbour>:<weight> ...   (node 0)
//! <neighbour>:<weight> ...                         (node 1)
//! ...                                              (one line per node)
//! ```
//!
//! Each node line lists the node's full adjacency, so every edge appears on
//! both of its endpoints' lines. The reader relies on
//! [`GridGraph::add_connection`] treating an equal-weight repeat as a no-op.
//! A node without edges is an empty line.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::GridGraph;

/// Text form of a graph, rendered through `Display`.
struct Text<'a>(&'a GridGraph);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "{} {}", graph.row_count(), graph.column_count())?;
        for i in 0..graph.node_count() {
            for (k, c) in graph.connections(i).iter().enumerate() {
                if k > 0 {
                    f.write_str(" ")?;
                }
                // `{}` on f64 is the shortest string that parses back to the
                // same value.
                write!(f, "{}:{}", c.neighbor, c.weight)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Write `graph` in text form.
pub fn write_to<W: Write>(graph: &GridGraph, mut w: W) -> io::Result<()> {
    write!(w, "{}", Text(graph))?;
    w.flush()
}

/// Text form of `graph` as a string.
pub fn to_text(graph: &GridGraph) -> String {
    Text(graph).to_string()
}

/// Parse a graph from its text form.
pub fn parse(text: &str) -> Result<GridGraph> {
    let mut lines = text.lines().enumerate().map(|(n, l)| (n + 1, l));

    let (line_no, header) = lines.next().ok_or_else(|| malformed(1, "missing dimension line"))?;
    let dims = header
        .split_whitespace()
        .map(|t| t.parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| malformed(line_no, format!("bad dimension: {e}")))?;
    let [rows, columns] = dims[..] else {
        return Err(malformed(
            line_no,
            format!("expected `<rows> <columns>`, found {} values", dims.len()),
        ));
    };

    // Count node lines before allocating anything sized by the header.
    let available = lines.clone().count();
    if let Some(expected) = rows.checked_mul(columns).filter(|&n| n > available) {
        return Err(malformed(
            available + 2,
            format!("expected {expected} node lines, found {available}"),
        ));
    }

    let mut graph = GridGraph::new(columns, rows)?;
    for (node, (line_no, line)) in lines.by_ref().take(graph.node_count()).enumerate() {
        parse_node_line(&mut graph, node, line_no, line)?;
    }

    if let Some((line_no, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(malformed(line_no, "more node lines than the dimensions allow"));
    }

    log::debug!(
        "parsed {} graph with {} edges",
        graph.shape(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Read a graph from any byte source.
pub fn read_from<R: Read>(mut r: R) -> Result<GridGraph> {
    let mut text = String::new();
    r.read_to_string(&mut text)?;
    parse(&text)
}

/// Load a graph from a file.
pub fn load(path: impl AsRef<Path>) -> Result<GridGraph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = parse(&text)?;
    log::debug!("loaded graph from {}", path.display());
    Ok(graph)
}

/// Save a graph to a file, replacing any existing content.
pub fn save(graph: &GridGraph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    write_to(graph, BufWriter::new(file))?;
    log::debug!("saved {} graph to {}", graph.shape(), path.display());
    Ok(())
}

fn parse_node_line(graph: &mut GridGraph, node: usize, line_no: usize, line: &str) -> Result<()> {
    let spaced = line.replace(':', " ");
    let tokens: Vec<&str> = spaced.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(malformed(
            line_no,
            format!("odd number of values ({}) in connection list", tokens.len()),
        ));
    }

    for pair in tokens.chunks_exact(2) {
        let neighbor = pair[0]
            .parse::<usize>()
            .map_err(|e| malformed(line_no, format!("bad neighbour index {:?}: {e}", pair[0])))?;
        let weight = pair[1]
            .parse::<f64>()
            .map_err(|e| malformed(line_no, format!("bad weight {:?}: {e}", pair[1])))?;
        graph.add_connection(node, neighbor, weight)?;
    }
    Ok(())
}

fn malformed(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::MalformedInput {
        line,
        reason: reason.into(),
    }
}
