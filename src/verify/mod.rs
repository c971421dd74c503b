// src/verify/mod.rs
//! Independent cross-check of a computed spanning tree.
//!
//! Recomputes the minimum weight with a textbook sorted-edge Kruskal and
//! checks that the candidate arcs form a spanning tree of the graph.

pub mod union_find;

use serde::Serialize;

use crate::graph::Graph;
use crate::mst::Arc;
use union_find::UnionFind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub vertex_count: usize,
    pub arc_count: usize,
    pub expected_weight: u64,
    pub actual_weight: u64,
    /// Arcs that join two vertices already connected by earlier arcs.
    pub cycle_arcs: usize,
    /// Arcs with no matching edge in the graph.
    pub foreign_arcs: usize,
    /// Components left after uniting every candidate arc.
    pub components: usize,
}

impl Verification {
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.cycle_arcs == 0
            && self.foreign_arcs == 0
            && self.components <= 1
            && self.arc_count == self.vertex_count.saturating_sub(1)
    }

    #[must_use]
    pub fn is_minimal(&self) -> bool {
        self.expected_weight == self.actual_weight
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_spanning_tree() && self.is_minimal()
    }
}

/// Checks `arcs` against `graph`.
#[must_use]
pub fn check(graph: &Graph, arcs: &[Arc]) -> Verification {
    let n = graph.vertex_count();
    let mut uf = UnionFind::new(n);
    let mut cycle_arcs = 0;
    let mut foreign_arcs = 0;

    for arc in arcs {
        if !edge_exists(graph, arc) {
            foreign_arcs += 1;
            continue;
        }
        if !uf.union(arc.v1.index(), arc.v2.index()) {
            cycle_arcs += 1;
        }
    }

    Verification {
        vertex_count: n,
        arc_count: arcs.len(),
        expected_weight: reference_weight(graph),
        actual_weight: arcs.iter().map(|a| u64::from(a.weight)).sum(),
        cycle_arcs,
        foreign_arcs,
        components: uf.set_count(),
    }
}

/// Weight of a minimum spanning forest computed by sorted-edge Kruskal.
#[must_use]
pub fn reference_weight(graph: &Graph) -> u64 {
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_unstable_by_key(|&(_, _, w)| w);

    let mut uf = UnionFind::new(graph.vertex_count());
    let mut total = 0;
    for (a, b, w) in edges {
        if uf.union(a.index(), b.index()) {
            total += u64::from(w);
        }
    }
    total
}

fn edge_exists(graph: &Graph, arc: &Arc) -> bool {
    graph.vertex(arc.v1).is_some_and(|v| {
        v.neighbors
            .iter()
            .any(|n| n.vertex == arc.v2 && n.weight == arc.weight)
    })
}
