// src/graph/mod.rs
//! Weighted undirected graph read from the line-oriented graph format.

pub mod parser;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{ArborError, Result};

/// Dense index of a vertex, `0..n` in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

impl VertexId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One adjacency-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: u32,
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pub name: String,
    pub neighbors: Vec<Neighbor>,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    by_name: HashMap<String, VertexId>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses a graph file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Parse` if it is malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ArborError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        parser::parse(&content)
    }

    /// Adds a vertex, returning its id, or `None` if the name is taken.
    pub fn add_vertex(&mut self, name: &str) -> Option<VertexId> {
        if self.by_name.contains_key(name) {
            return None;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            name: name.to_string(),
            neighbors: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        Some(id)
    }

    /// Adds an undirected edge: one neighbor entry on each endpoint.
    ///
    /// # Errors
    /// Returns `UnknownVertex` if either endpoint is not in the graph.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: u32) -> Result<()> {
        for v in [a, b] {
            if v.index() >= self.vertices.len() {
                return Err(ArborError::UnknownVertex { vertex: v });
            }
        }
        self.vertices[a.index()].neighbors.push(Neighbor { vertex: b, weight });
        self.vertices[b.index()].neighbors.push(Neighbor { vertex: a, weight });
        Ok(())
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Display name of a vertex, falling back to its index.
    #[must_use]
    pub fn name_of(&self, id: VertexId) -> String {
        self.vertex(id)
            .map_or_else(|| id.to_string(), |v| v.name.clone())
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges (each is stored on both endpoints).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum::<usize>() / 2
    }

    /// Iterates each undirected edge once as `(a, b, weight)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, u32)> + '_ {
        self.vertices.iter().enumerate().flat_map(|(i, v)| {
            v.neighbors
                .iter()
                .filter(move |n| i < n.vertex.index())
                .map(move |n| (VertexId(i), n.vertex, n.weight))
        })
    }
}
