// src/mst/arc.rs
use std::cmp::Ordering;

use serde::Serialize;

use crate::graph::VertexId;

/// A weighted edge as seen from one endpoint.
///
/// `v1` is the vertex whose adjacency list produced the arc, `v2` the
/// neighbor. The same undirected edge yields one arc per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Arc {
    pub v1: VertexId,
    pub v2: VertexId,
    pub weight: u32,
}

impl Arc {
    #[must_use]
    pub fn new(v1: VertexId, v2: VertexId, weight: u32) -> Self {
        Self { v1, v2, weight }
    }

    /// True if both arcs describe the same undirected edge.
    #[must_use]
    pub fn same_edge(&self, other: &Arc) -> bool {
        self.weight == other.weight
            && ((self.v1 == other.v1 && self.v2 == other.v2)
                || (self.v1 == other.v2 && self.v2 == other.v1))
    }
}

// Weight decides; endpoints only break ties so that `Ord` agrees with `Eq`.
impl Ord for Arc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.v1.cmp(&other.v1))
            .then_with(|| self.v2.cmp(&other.v2))
    }
}

impl PartialOrd for Arc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
