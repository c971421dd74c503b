// src/graph/parser.rs
//! Parser for the graph file format:
//!
//! ```text
//! 4
//! A
//! B
//! C
//! D
//! A B 1
//! B C 2
//! ```
//!
//! The first significant line is the vertex count, followed by that many
//! vertex names, then one `name name weight` edge per line. Blank lines and
//! `#` comments are skipped.

use super::{Graph, VertexId};
use crate::error::{ArborError, Result};

/// Parses graph text into a [`Graph`].
///
/// # Errors
/// Returns `Parse` with the 1-based line number of the first bad line.
pub fn parse(content: &str) -> Result<Graph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let Some((line, header)) = lines.next() else {
        return Err(ArborError::parse(1, "missing vertex count"));
    };
    let count: usize = header
        .parse()
        .map_err(|_| ArborError::parse(line, format!("invalid vertex count '{header}'")))?;

    let mut graph = Graph::new();
    for _ in 0..count {
        let Some((line, name)) = lines.next() else {
            return Err(ArborError::parse(
                content.lines().count(),
                format!("expected {count} vertex names, found {}", graph.vertex_count()),
            ));
        };
        if name.split_whitespace().count() != 1 {
            return Err(ArborError::parse(line, format!("invalid vertex name '{name}'")));
        }
        if graph.add_vertex(name).is_none() {
            return Err(ArborError::parse(line, format!("duplicate vertex '{name}'")));
        }
    }

    for (line, text) in lines {
        let (a, b, weight) = parse_edge(&graph, line, text)?;
        graph.add_edge(a, b, weight)?;
    }

    Ok(graph)
}

fn parse_edge(graph: &Graph, line: usize, text: &str) -> Result<(VertexId, VertexId, u32)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [a, b, w] = fields[..] else {
        return Err(ArborError::parse(
            line,
            format!("expected '<vertex> <vertex> <weight>', found '{text}'"),
        ));
    };

    let resolve = |name: &str| {
        graph
            .lookup(name)
            .ok_or_else(|| ArborError::parse(line, format!("unknown vertex '{name}'")))
    };
    let a = resolve(a)?;
    let b = resolve(b)?;
    if a == b {
        return Err(ArborError::parse(line, format!("self-loop on '{}'", graph.name_of(a))));
    }

    let weight = w
        .parse::<u32>()
        .map_err(|_| ArborError::parse(line, format!("invalid weight '{w}'")))?;

    Ok((a, b, weight))
}
