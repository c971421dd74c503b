// src/mst/forest.rs
//! Parent forest identifying which partial tree owns each vertex.
//!
//! A vertex belongs to the tree whose root its parent chain ends at. Roots
//! are their own parent. Merging only redirects one root at another; there
//! is no union by rank, so the surviving root is always the caller's choice.

use crate::error::{ArborError, Result};
use crate::graph::VertexId;

#[derive(Debug, Clone)]
pub struct Forest {
    parent: Vec<VertexId>,
    compress: bool,
}

// Walks are bounded by `parent.len()` and every index is checked against it
// in `check`, so direct indexing below cannot go out of range.
#[allow(clippy::indexing_slicing)]
impl Forest {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(VertexId).collect(),
            compress: false,
        }
    }

    /// Like [`Forest::new`], but successful membership walks rewrite the
    /// visited chain to point straight at the root.
    #[must_use]
    pub fn with_path_compression(n: usize) -> Self {
        Self {
            compress: true,
            ..Self::new(n)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// # Errors
    /// Returns `UnknownVertex` if `v` is outside the forest.
    pub fn parent(&self, v: VertexId) -> Result<VertexId> {
        self.check(v)?;
        Ok(self.parent[v.index()])
    }

    /// # Errors
    /// Returns `UnknownVertex` if `v` is outside the forest.
    pub fn is_root(&self, v: VertexId) -> Result<bool> {
        Ok(self.parent(v)? == v)
    }

    /// Follows parent links from `v` to its root.
    ///
    /// # Errors
    /// Returns `UnknownVertex` for an out-of-range id and `CyclicChain` if
    /// the walk does not reach a root within `len()` steps.
    pub fn root_of(&self, v: VertexId) -> Result<VertexId> {
        self.check(v)?;
        let mut cur = v;
        for _ in 0..=self.parent.len() {
            let next = self.parent[cur.index()];
            if next == cur {
                return Ok(cur);
            }
            cur = next;
        }
        Err(ArborError::CyclicChain { vertex: v })
    }

    /// Walks up from `v`, answering whether the chain meets `root`.
    ///
    /// Stops with `true` as soon as a vertex equal to `root` is seen and with
    /// `false` at the first self-parented vertex that is not `root`.
    ///
    /// # Errors
    /// Returns `UnknownVertex` for an out-of-range id and `CyclicChain` if
    /// the walk does not terminate within `len()` steps.
    pub fn chain_reaches(&mut self, v: VertexId, root: VertexId) -> Result<bool> {
        self.check(v)?;
        let mut cur = v;
        for _ in 0..=self.parent.len() {
            if cur == root {
                if self.compress {
                    self.compress_chain(v, root);
                }
                return Ok(true);
            }
            let next = self.parent[cur.index()];
            if next == cur {
                return Ok(false);
            }
            cur = next;
        }
        Err(ArborError::CyclicChain { vertex: v })
    }

    /// Makes `child_root` a child of `parent_root`, joining their sets.
    ///
    /// # Errors
    /// Returns `UnknownVertex` if either id is outside the forest.
    pub fn attach(&mut self, child_root: VertexId, parent_root: VertexId) -> Result<()> {
        self.check(child_root)?;
        self.check(parent_root)?;
        self.parent[child_root.index()] = parent_root;
        Ok(())
    }

    /// Points every vertex on the (already verified) chain from `v` at `root`.
    fn compress_chain(&mut self, v: VertexId, root: VertexId) {
        let mut cur = v;
        while cur != root {
            let next = self.parent[cur.index()];
            self.parent[cur.index()] = root;
            cur = next;
        }
    }

    fn check(&self, v: VertexId) -> Result<()> {
        if v.index() < self.parent.len() {
            Ok(())
        } else {
            Err(ArborError::UnknownVertex { vertex: v })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId(i)
    }

    #[test]
    fn singletons_are_their_own_roots() {
        let f = Forest::new(3);
        for i in 0..3 {
            assert!(f.is_root(v(i)).unwrap());
            assert_eq!(f.root_of(v(i)).unwrap(), v(i));
        }
    }

    #[test]
    fn chain_reaches_follows_attachments() {
        let mut f = Forest::new(4);
        f.attach(v(1), v(0)).unwrap();
        f.attach(v(2), v(1)).unwrap();
        assert!(f.chain_reaches(v(2), v(0)).unwrap());
        assert!(f.chain_reaches(v(2), v(1)).unwrap());
        assert!(!f.chain_reaches(v(2), v(3)).unwrap());
        assert!(!f.chain_reaches(v(3), v(0)).unwrap());
    }

    #[test]
    fn compression_keeps_membership() {
        let mut f = Forest::with_path_compression(4);
        f.attach(v(1), v(0)).unwrap();
        f.attach(v(2), v(1)).unwrap();
        f.attach(v(3), v(2)).unwrap();
        assert!(f.chain_reaches(v(3), v(0)).unwrap());
        assert_eq!(f.parent(v(3)).unwrap(), v(0));
        assert_eq!(f.parent(v(2)).unwrap(), v(0));
        for i in 0..4 {
            assert_eq!(f.root_of(v(i)).unwrap(), v(0));
        }
    }

    #[test]
    fn cycle_is_reported_not_looped() {
        let mut f = Forest::new(2);
        f.attach(v(0), v(1)).unwrap();
        f.attach(v(1), v(0)).unwrap();
        assert!(matches!(
            f.root_of(v(0)),
            Err(ArborError::CyclicChain { .. })
        ));
        assert!(matches!(
            f.chain_reaches(v(0), v(5)),
            Err(ArborError::CyclicChain { .. })
        ));
    }

    #[test]
    fn out_of_range_vertex() {
        let f = Forest::new(1);
        assert!(matches!(
            f.root_of(v(1)),
            Err(ArborError::UnknownVertex { .. })
        ));
    }
}
