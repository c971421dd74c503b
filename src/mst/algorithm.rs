// src/mst/algorithm.rs
//! Kruskal-style MST by repeatedly merging the front partial tree with the
//! tree at the far end of its cheapest outgoing arc.

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::arc::Arc;
use super::forest::Forest;
use super::partial_tree::PartialTree;
use super::tree_list::PartialTreeList;
use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Builds one singleton partial tree per vertex, in vertex order.
///
/// Each tree's heap holds one arc per entry of its vertex's adjacency list,
/// so every undirected edge appears in the heaps of both endpoints.
#[must_use]
pub fn initialize(graph: &Graph) -> PartialTreeList {
    initialize_with(graph, &AlgorithmConfig::default())
}

/// [`initialize`] with tuning from the `[algorithm]` config section.
#[must_use]
pub fn initialize_with(graph: &Graph, config: &AlgorithmConfig) -> PartialTreeList {
    let n = graph.vertex_count();
    let forest = if config.path_compression {
        Forest::with_path_compression(n)
    } else {
        Forest::new(n)
    };

    let mut list = PartialTreeList::with_forest(forest);
    for (i, vertex) in graph.vertices().iter().enumerate() {
        let id = VertexId(i);
        let mut tree = PartialTree::new(id);
        for neighbor in &vertex.neighbors {
            tree.arcs_mut().insert(Arc::new(id, neighbor.vertex, neighbor.weight));
        }
        list.append(tree);
    }

    debug!(trees = list.size(), "initialized partial tree list");
    list
}

/// Runs the merge loop until one tree is left and returns the MST arcs.
///
/// # Errors
/// Only fails if the forest is corrupt (a parent chain that never reaches a
/// root) or refers to unknown vertices; a list built by [`initialize`]
/// never does.
pub fn execute(mut list: PartialTreeList) -> Result<Vec<Arc>> {
    let mut mst = Vec::with_capacity(list.size().saturating_sub(1));

    while list.size() > 1 {
        let mut tree = list.pop_front()?;

        match next_cross_tree(&mut list, &mut tree)? {
            Some((arc, other)) => {
                debug!(
                    survivor = %tree.root(),
                    absorbed = %other.root(),
                    weight = arc.weight,
                    remaining = list.size(),
                    "merging partial trees"
                );
                tree.merge(other, list.forest_mut())?;
                mst.push(arc);
                list.append(tree);
            }
            None => {
                warn!(
                    root = %tree.root(),
                    "no arc leaves this partial tree; graph is not connected"
                );
            }
        }
    }

    info!(arcs = mst.len(), "minimum spanning tree complete");
    Ok(mst)
}

/// Drains `tree`'s heap until an arc reaches another tree still in `list`.
///
/// On success the other tree has already been unlinked from `list`.
fn next_cross_tree(
    list: &mut PartialTreeList,
    tree: &mut PartialTree,
) -> Result<Option<(Arc, PartialTree)>> {
    while let Some(arc) = tree.arcs_mut().delete_min() {
        if let Some(other) = list.remove_tree_containing(arc.v1)? {
            return Ok(Some((arc, other)));
        }
        if let Some(other) = list.remove_tree_containing(arc.v2)? {
            return Ok(Some((arc, other)));
        }
        trace!(v1 = %arc.v1, v2 = %arc.v2, weight = arc.weight, "skipping internal arc");
    }
    Ok(None)
}

/// MST arcs with their total weight.
#[derive(Debug, Clone, Serialize)]
pub struct MstReport {
    pub arcs: Vec<Arc>,
    pub total_weight: u64,
}

impl MstReport {
    #[must_use]
    pub fn new(arcs: Vec<Arc>) -> Self {
        let total_weight = arcs.iter().map(|a| u64::from(a.weight)).sum();
        Self { arcs, total_weight }
    }

    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// True when the arcs can span a graph of `vertex_count` vertices.
    #[must_use]
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.arcs.len() == vertex_count.saturating_sub(1)
    }
}
