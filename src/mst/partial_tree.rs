// src/mst/partial_tree.rs
use std::fmt;

use super::arc::Arc;
use super::forest::Forest;
use super::heap::MinHeap;
use crate::error::Result;
use crate::graph::VertexId;

/// One connected fragment of the spanning tree under construction.
///
/// Membership is not stored here: a vertex is in this tree when its parent
/// chain in the [`Forest`] reaches `root`. The heap keeps every arc that once
/// left the fragment; arcs made internal by later merges stay in it and are
/// skipped when drawn.
#[derive(Debug, Clone)]
pub struct PartialTree {
    root: VertexId,
    arcs: MinHeap<Arc>,
}

impl PartialTree {
    /// A singleton tree with no candidate arcs yet.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self {
            root,
            arcs: MinHeap::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> VertexId {
        self.root
    }

    #[must_use]
    pub fn arcs(&self) -> &MinHeap<Arc> {
        &self.arcs
    }

    pub fn arcs_mut(&mut self) -> &mut MinHeap<Arc> {
        &mut self.arcs
    }

    /// Absorbs `other`: its root is attached under ours and its remaining
    /// arcs join our heap. `self` always survives.
    ///
    /// # Errors
    /// Returns `UnknownVertex` if either root is outside `forest`.
    pub fn merge(&mut self, other: PartialTree, forest: &mut Forest) -> Result<()> {
        forest.attach(other.root, self.root)?;
        self.arcs.merge(other.arcs);
        Ok(())
    }
}

impl fmt::Display for PartialTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root {} ({} candidate arcs)", self.root, self.arcs.len())
    }
}
